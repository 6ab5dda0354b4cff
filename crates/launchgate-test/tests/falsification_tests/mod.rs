//! Falsification tests, by category:
//!
//! | Category | ID Range  | Description              |
//! |----------|-----------|--------------------------|
//! | A        | F001-F010 | Abort and launch paths   |
//! | B        | F011-F020 | Registry identity        |
//! | C        | F021-F030 | Sessions with doubles    |

// Allow test-specific patterns that are denied in production code
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

mod identity;
mod scenarios;
