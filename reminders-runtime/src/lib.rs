// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

#[macro_use]
mod logging;

pub mod dispatcher;
pub mod impls;

pub use self::dispatcher::{Dispatcher, Job};
pub use self::impls::inline::InlineDispatcher;
pub use self::impls::serial::SerialDispatcher;
pub use self::impls::thread::ThreadDispatcher;
#[cfg(feature = "runtime-tokio")]
pub use self::impls::tokio::TokioDispatcher;
