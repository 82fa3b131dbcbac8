// Internal macros: impl generation used by histo-caps itself.

pub mod tuples;
