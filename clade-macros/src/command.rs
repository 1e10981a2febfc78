//! Command-related macros.
//!
//! This module contains:
//! - `#[command]` - Attribute macro registering a function as a discoverable command

use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::{FnArg, Ident, ItemFn, LitStr, Token, Type, parse::Parse};

/// Arguments for the `#[command]` macro.
pub(crate) struct CommandArgs {
    /// Command address; defaults to the function name.
    pub input: Option<LitStr>,
    /// Human readable description.
    pub description: Option<LitStr>,
}

impl Parse for CommandArgs {
    fn parse(input: syn::parse::ParseStream) -> syn::Result<Self> {
        let mut args = CommandArgs {
            input: None,
            description: None,
        };

        // A bare string is the input
        if input.peek(LitStr) {
            args.input = Some(input.parse()?);
        }

        while !input.is_empty() {
            if input.peek(Token![,]) {
                input.parse::<Token![,]>()?;
            }

            if input.is_empty() {
                break;
            }

            let ident: Ident = input.parse()?;
            input.parse::<Token![=]>()?;

            match ident.to_string().as_str() {
                "input" => args.input = Some(input.parse()?),
                "description" => args.description = Some(input.parse()?),
                other => {
                    return Err(syn::Error::new(
                        ident.span(),
                        format!("unknown attribute: {}", other),
                    ));
                }
            }
        }

        Ok(args)
    }
}

/// The context type behind the single `&mut Context` parameter.
fn context_type(input: &ItemFn) -> syn::Result<&Type> {
    let inputs = &input.sig.inputs;
    if inputs.len() != 1 {
        return Err(syn::Error::new_spanned(
            inputs,
            "command function must take exactly one argument: fn(app: &mut App)",
        ));
    }

    match inputs.first() {
        Some(FnArg::Typed(pat_type)) => match &*pat_type.ty {
            Type::Reference(type_ref) if type_ref.mutability.is_some() => Ok(&type_ref.elem),
            other => Err(syn::Error::new_spanned(
                other,
                "command context must be a mutable reference (&mut App)",
            )),
        },
        _ => Err(syn::Error::new_spanned(
            inputs,
            "command function must not take self",
        )),
    }
}

/// Expands `#[command]` on `input`.
pub(crate) fn expand(args: CommandArgs, input: ItemFn) -> syn::Result<TokenStream> {
    if let Some(asyncness) = &input.sig.asyncness {
        return Err(syn::Error::new_spanned(
            asyncness,
            "command function must not be async",
        ));
    }
    if !input.sig.generics.params.is_empty() {
        return Err(syn::Error::new_spanned(
            &input.sig.generics,
            "command function must not be generic",
        ));
    }

    let context = context_type(&input)?;
    let fn_name = &input.sig.ident;
    let shim = format_ident!("__clade_command_{}", fn_name);

    let command_input = args.input.unwrap_or_else(|| {
        let name = fn_name.to_string().replace('_', " ");
        LitStr::new(&name, fn_name.span())
    });
    let description = args
        .description
        .unwrap_or_else(|| LitStr::new("", proc_macro2::Span::call_site()));

    Ok(quote! {
        #input

        #[doc(hidden)]
        #[allow(non_snake_case)]
        fn #shim(
            ctx: &mut dyn ::std::any::Any,
        ) -> ::core::result::Result<(), ::clade::BoxError> {
            let ctx = ::clade::discovery::downcast_context::<#context>(ctx)?;
            ::clade::IntoActionResult::into_action_result(#fn_name(ctx))
        }

        ::clade::inventory::submit! {
            ::clade::discovery::CommandRegistration::new(
                ::std::any::TypeId::of::<#context>,
                #command_input,
                #description,
                #shim,
            )
        }
    })
}
