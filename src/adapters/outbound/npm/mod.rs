/// npm adapters: the `package.json`/npm CLI channel and its timeout decorator
mod npm_channel;
mod timeout_channel;

pub use npm_channel::NpmChannel;
pub use timeout_channel::{TimeoutChannel, DEFAULT_REQUEST_TIMEOUT};
