/// Build the per-connector closure passed to `Gazette::fan_out`.
///
/// The closure returns `None` when the connector lacks the capability behind
/// `$accessor`, so it is skipped rather than counted as a failure. Listed
/// `clone` bindings are cloned once per connector and moved into the call.
/// A capability that disappears between selection and the call is reported
/// as `Unsupported`, labelled with `$op`'s capability.
///
/// ```rust,ignore
/// let op = Operation::Search;
/// let call = gazette_provider_call!(
///     accessor: as_query_provider,
///     operation: op,
///     clone: [query, lang],
///     call: |p| p.search(&query, &lang)
/// );
/// ```
macro_rules! gazette_provider_call {
    (
        accessor: $accessor:ident,
        operation: $op:expr,
        clone: [ $( $clone:ident ),* ],
        call: |$p:ident| $call:expr
    ) => {
        |c: std::sync::Arc<dyn gazette_core::NewsConnector>| {
            c.$accessor()?;
            let capability = $op.capability();
            $( let $clone = $clone.clone(); )*
            Some(async move {
                match c.$accessor() {
                    Some($p) => $call.await,
                    None => Err(gazette_core::GazetteError::unsupported(capability.as_str())),
                }
            })
        }
    };
}

pub(crate) use gazette_provider_call;
