/// Source file helpers.
///
/// This module validates paths given on the command line and decides how a
/// source file is named in diagnostics. The front end itself only ever sees
/// source text; everything about files lives here.
pub mod source;
