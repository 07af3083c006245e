#[macro_export]
macro_rules! regex {
    ($pat:literal) => {{
        static RE: once_cell::sync::Lazy<regex::Regex> =
            once_cell::sync::Lazy::new(|| regex::Regex::new($pat).unwrap());
        &*RE
    }};
}

#[macro_export]
macro_rules! rule {
    (
        name: $name:expr
        $(, buckets: $buckets:expr)?
        , prod: |$phrase:ident, $ctx:ident| $body_expr:block
        $(,)?
    ) => {{
        $crate::Rule {
            name: $name,
            buckets: { 0 $(| $buckets)? },
            production: Box::new(move |$phrase: &str, $ctx: &$crate::RuleContext| -> $crate::RuleResult {
                $body_expr
            }),
        }
    }};
}
