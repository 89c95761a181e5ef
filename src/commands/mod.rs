pub type CmdResult<T> = opacity_fix::Result<(T, i32)>;

pub(crate) struct GlobalArgs {
    /// Emit the JSON envelope instead of text lines.
    pub json: bool,
}

pub mod fix;
