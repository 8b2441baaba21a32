/// Image source that falls back to a local asset once, and only once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FallbackSource {
    primary: &'static str,
    fallback: &'static str,
    failed: bool,
}

impl FallbackSource {
    pub fn new(primary: &'static str, fallback: &'static str) -> Self {
        Self {
            primary,
            fallback,
            failed: false,
        }
    }

    pub fn current(&self) -> &'static str {
        if self.failed {
            self.fallback
        } else {
            self.primary
        }
    }

    /// Records a load error. Returns `true` when this swapped to the fallback;
    /// later errors (the fallback failing too) change nothing.
    pub fn fail(&mut self) -> bool {
        if self.failed {
            return false;
        }
        self.failed = true;
        true
    }
}
