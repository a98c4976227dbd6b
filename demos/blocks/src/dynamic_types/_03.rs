//! Old copy of `_3.rs`; not a canonical identifier, so the build copy drops it.
compile_error!("`_03.rs` must not be part of a build");
