/// Builds a [`Sini`](crate::Sini) document from a literal layout.
///
/// Sections are created in the order written and every value goes through
/// [`ToValue`](crate::ToValue), so anything [`Section::set`](crate::Section::set)
/// accepts can be used.
///
/// # Examples
///
/// ```rust
/// use sini::sini;
///
/// let sini = sini! {
///     "" => { "a" => 42, "b" => "asdf" },
///     "A" => { "c" => 4.5 },
///     "empty" => {},
/// };
///
/// assert_eq!(sini.to_string(), "a=42\nb=asdf\n\n[A]\nc=4.5\n\n[empty]\n\n");
/// ```
#[macro_export]
macro_rules! sini {
    // Handle empty document
    () => {
        $crate::Sini::new()
    };

    ($($section:expr => { $($key:expr => $value:expr),* $(,)? }),+ $(,)?) => {{
        let mut sini = $crate::Sini::new();
        $(
            {
                let _section = sini.add_section($section);
                $(
                    _section.set($key, $value);
                )*
            }
        )+
        sini
    }};
}
