//! Procedural macros for clade.

use proc_macro::TokenStream;
use syn::{ItemFn, parse_macro_input};

mod command;

/// Register a function as a discoverable command.
///
/// The function takes the application context by `&mut` and returns `()` or
/// `Result<(), E>`. It stays callable as written; the attribute additionally
/// submits a registration that `ApplicationBuilder::discover` picks up for
/// that context type.
///
/// # Arguments
///
/// - `input = "..."`: the command address, parsed like any other input.
///   Defaults to the function name with `_` read as a space.
/// - `description = "..."`: human readable description.
///
/// # Example
///
/// ```rust,ignore
/// use clade::command;
///
/// struct Shell;
///
/// #[command(description = "Build the example")]
/// fn factory_example(_shell: &mut Shell) {}
///
/// #[command(input = "deployProduction")]
/// fn deploy(_shell: &mut Shell) -> Result<(), std::io::Error> {
///     Ok(())
/// }
/// ```
#[proc_macro_attribute]
pub fn command(attr: TokenStream, item: TokenStream) -> TokenStream {
    let args = parse_macro_input!(attr as command::CommandArgs);
    let input = parse_macro_input!(item as ItemFn);

    command::expand(args, input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}
