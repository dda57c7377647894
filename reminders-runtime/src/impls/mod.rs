// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

pub mod inline;
pub mod serial;
pub mod thread;
#[cfg(feature = "runtime-tokio")]
pub mod tokio;
