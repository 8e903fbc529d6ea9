use std::fmt;

/// Average frame rate over an animation interval, in hundredths of a frame
/// per second.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameRate {
    Measured { hundredths: u64 },
    /// The interval was zero milliseconds long.
    Undefined,
}

impl FrameRate {
    pub fn measure(frames: u64, elapsed_ms: u64) -> Self {
        if elapsed_ms == 0 {
            return Self::Undefined;
        }
        Self::Measured {
            hundredths: frames.saturating_mul(100_000) / elapsed_ms,
        }
    }
}

impl fmt::Display for FrameRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Measured { hundredths } => {
                write!(f, "{}.{:02} fps", hundredths / 100, hundredths % 100)
            }
            Self::Undefined => write!(f, "undefined"),
        }
    }
}
