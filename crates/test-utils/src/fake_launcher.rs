use std::future::Future;
use std::pin::Pin;
use std::sync::{Arc, Mutex};

use filerun::errors::Result;
use filerun::exec::{Invocation, Launcher};

/// A fake launcher that records every invocation instead of starting a
/// process.
#[derive(Debug, Clone, Default)]
pub struct FakeLauncher {
    launched: Arc<Mutex<Vec<Invocation>>>,
}

impl FakeLauncher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn invocations(&self) -> Vec<Invocation> {
        self.launched.lock().unwrap().clone()
    }

    /// Rendered `program args` lines, in launch order.
    pub fn lines(&self) -> Vec<String> {
        self.invocations().iter().map(|i| i.to_string()).collect()
    }
}

impl Launcher for FakeLauncher {
    fn launch(
        &mut self,
        invocation: Invocation,
    ) -> Pin<Box<dyn Future<Output = Result<()>> + Send + '_>> {
        let launched = Arc::clone(&self.launched);

        Box::pin(async move {
            launched.lock().unwrap().push(invocation);
            Ok(())
        })
    }
}
