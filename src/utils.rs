/// Print an error, followed by every error in its `source` chain. Used as the
/// `Debug` impl of our error enums, so that `{e:?}` in logs shows the whole
/// story instead of just the top level.
pub fn error_chain_fmt(
    e: &impl std::error::Error,
    f: &mut std::fmt::Formatter<'_>,
) -> std::fmt::Result {
    writeln!(f, "{e}")?;
    let mut current = e.source();
    while let Some(cause) = current {
        writeln!(f, "Caused by:\n\t{cause}")?;
        current = cause.source();
    }
    Ok(())
}

