/// Where the tag of a log line comes from.
///
/// A tag groups log lines by originating component. It becomes the `log`
/// target when forwarded to the `log` facade.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default)]
pub enum TagSource<'a> {
    /// No tag supplied; derive it from the call site when lookup is enabled.
    #[default]
    Lookup,
    /// Explicit tag, used verbatim.
    Literal(&'a str),
    /// Full type name of an object supplied as the tag.
    Type(&'static str),
}

impl TagSource<'static> {
    /// Tags a line with the simple name of `value`'s type.
    #[inline]
    pub fn of<T: ?Sized>(_value: &T) -> Self {
        TagSource::Type(core::any::type_name::<T>())
    }

    /// Like [`TagSource::of`] without needing a value.
    #[inline]
    pub fn of_type<T: ?Sized>() -> Self {
        TagSource::Type(core::any::type_name::<T>())
    }
}

impl<'a> From<&'a str> for TagSource<'a> {
    fn from(tag: &'a str) -> Self {
        TagSource::Literal(tag)
    }
}

impl<'a> From<&'a String> for TagSource<'a> {
    fn from(tag: &'a String) -> Self {
        TagSource::Literal(tag.as_str())
    }
}

impl<'a> From<Option<&'a str>> for TagSource<'a> {
    fn from(tag: Option<&'a str>) -> Self {
        tag.map_or(TagSource::Lookup, TagSource::Literal)
    }
}

/// Reduces a full type name to its simple name.
///
/// References, `mut` and `dyn` are peeled, generic arguments dropped, and the
/// module path removed: `&mut app::net::Client<u8>` becomes `Client`.
pub fn simple_type_name(full: &str) -> &str {
    let mut name = full.trim();
    loop {
        let next = name
            .trim_start_matches('&')
            .trim_start()
            .trim_start_matches("mut ")
            .trim_start_matches("dyn ")
            .trim_start();
        if next.len() == name.len() {
            break;
        }
        name = next;
    }

    // Tuples, slices and arrays have no path to strip.
    if name.starts_with('(') || name.starts_with('[') {
        return name;
    }

    let name = name.split_once('<').map_or(name, |(head, _)| head);
    let name = name.rsplit_once("::").map_or(name, |(_, tail)| tail);
    if name.is_empty() { full } else { name }
}
