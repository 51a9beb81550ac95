/***************************************/
/*               Macros                */
/***************************************/
/// Unwraps a startup `Result`, or logs `<context>: <error>` and exits with status 1.
#[macro_export]
macro_rules! unwrap_or_exit {
    ($expr:expr, $context:expr) => {
        match $expr {
            Ok(val) => val,
            Err(e) => {
                log::error!("{}: {}", $context, e);
                std::process::exit(1);
            }
        }
    };
}
