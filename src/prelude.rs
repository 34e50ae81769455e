pub use tokio::io::{AsyncWrite, AsyncWriteExt};

pub use crate::{
    cmd::Flow,
    error::{ShellError, ShellResult},
    state::Session,
};
