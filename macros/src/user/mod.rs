// User-facing macros.

pub mod structural;
