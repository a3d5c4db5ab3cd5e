pub mod remote_analyzer;

pub use remote_analyzer::{DisabledRemote, IRemoteAnalyzer};
