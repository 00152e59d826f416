use core::panic::Location;

use super::tag::simple_type_name;

/// Source location of a log call.
///
/// Captured at the call site instead of walking the stack: the macros use
/// `file!`, `line!` and the enclosing function's path (see [`call_site!`]);
/// plain method calls use `#[track_caller]` and only know file and line.
///
/// [`call_site!`]: crate::call_site
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct CallSite {
    file: &'static str,
    line: u32,
    function: Option<&'static str>,
}

impl CallSite {
    pub const fn new(file: &'static str, line: u32, function: Option<&'static str>) -> Self {
        Self { file, line, function }
    }

    /// Location of the caller of the current `#[track_caller]` function.
    #[track_caller]
    #[inline]
    pub fn caller() -> Self {
        let loc = Location::caller();
        Self::new(loc.file(), loc.line(), None)
    }

    #[inline]
    pub fn file(&self) -> &'static str {
        self.file
    }

    #[inline]
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Full path of the enclosing function, when known.
    #[inline]
    pub fn function(&self) -> Option<&'static str> {
        self.function
    }

    /// File name without directories.
    pub fn file_name(&self) -> &'static str {
        self.file.rsplit(['/', '\\']).next().unwrap_or(self.file)
    }

    /// Name of the calling function, closures skipped.
    pub fn method(&self) -> Option<&'static str> {
        let segments = self.function.map(function_segments)?;
        segments.last().copied().map(simple_segment)
    }

    /// Simple name of the item owning the calling function.
    ///
    /// For a method this is its type, for a free function its module.
    /// `None` when the path is too short to have an owner.
    pub fn owner(&self) -> Option<&'static str> {
        let segments = self.function.map(function_segments)?;
        if segments.len() < 2 {
            return None;
        }
        Some(simple_segment(segments[segments.len() - 2]))
    }
}

/// Splits a function path on `::`, ignoring separators nested in `<...>`,
/// and drops trailing closure frames.
fn function_segments(path: &'static str) -> Vec<&'static str> {
    let mut segments = Vec::new();
    let bytes = path.as_bytes();
    let mut depth = 0usize;
    let mut start = 0;
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'<' => depth += 1,
            b'>' => depth = depth.saturating_sub(1),
            b':' if depth == 0 && bytes.get(i + 1) == Some(&b':') => {
                segments.push(&path[start..i]);
                i += 2;
                start = i;
                continue;
            }
            _ => {}
        }
        i += 1;
    }
    segments.push(&path[start..]);

    while segments.last().is_some_and(|s| s.starts_with("{{")) {
        segments.pop();
    }
    segments.retain(|s| !s.is_empty());
    segments
}

/// `<app::Client as app::Service>` → `Client`; anything else via `simple_type_name`.
fn simple_segment(segment: &'static str) -> &'static str {
    let inner = segment
        .strip_prefix('<')
        .and_then(|s| s.strip_suffix('>'))
        .map(|s| s.split_once(" as ").map_or(s, |(ty, _)| ty))
        .unwrap_or(segment);
    simple_type_name(inner)
}

/// Captures the [`CallSite`] of the macro invocation, including the path of
/// the enclosing function.
#[macro_export]
macro_rules! call_site {
    () => {{
        fn __taglog_here() {}
        fn __taglog_name_of<T>(_: T) -> &'static str {
            ::core::any::type_name::<T>()
        }
        let name = __taglog_name_of(__taglog_here);
        $crate::CallSite::new(
            ::core::file!(),
            ::core::line!(),
            name.strip_suffix("::__taglog_here"),
        )
    }};
}
