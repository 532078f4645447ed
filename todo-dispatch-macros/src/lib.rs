//! Procedural macros for todo-dispatch

use darling::{FromDeriveInput, FromVariant};
use proc_macro::TokenStream;
use quote::{format_ident, quote};
use syn::{parse_macro_input, DeriveInput};

/// Container-level attributes for #[derive(Action)]
#[derive(Debug, FromDeriveInput)]
#[darling(attributes(action), supports(enum_any))]
struct ActionOpts {
    ident: syn::Ident,
    generics: syn::Generics,
    data: darling::ast::Data<ActionVariant, ()>,

    /// Generate `is_{category}()` predicates
    #[darling(default)]
    predicates: bool,
}

/// Variant-level attributes
#[derive(Debug, FromVariant)]
#[darling(attributes(action))]
struct ActionVariant {
    ident: syn::Ident,

    /// Explicit category for this variant
    #[darling(default)]
    category: Option<String>,
}

/// Derive macro for the Action trait
///
/// Generates a `name()` method that returns the variant name as a static string.
///
/// When any variant carries `#[action(category = "...")]`, also generates:
/// - `category() -> Option<&'static str>`
/// - an `ActionCategory` impl
/// - with `#[action(predicates)]`, `is_{category}()` for each category
///
/// # Example
/// ```ignore
/// #[derive(Action, Clone, Debug)]
/// #[action(predicates)]
/// enum TodoAction {
///     #[action(category = "todos")]
///     AddTodo { id: u64, text: String },
///     #[action(category = "todos")]
///     ToggleTodo { id: u64 },
///     SetVisibilityFilter { filter: VisibilityFilter },
/// }
///
/// let action = TodoAction::ToggleTodo { id: 0 };
/// assert_eq!(action.name(), "ToggleTodo");
/// assert_eq!(action.category(), Some("todos"));
/// assert!(action.is_todos());
/// ```
#[proc_macro_derive(Action, attributes(action))]
pub fn derive_action(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    let opts = match ActionOpts::from_derive_input(&input) {
        Ok(opts) => opts,
        Err(e) => return e.write_errors().into(),
    };

    let name = &opts.ident;
    let (impl_generics, ty_generics, where_clause) = opts.generics.split_for_impl();

    let variants = match &opts.data {
        darling::ast::Data::Enum(variants) => variants,
        _ => {
            return syn::Error::new_spanned(&input, "Action can only be derived for enums")
                .to_compile_error()
                .into();
        }
    };

    // `{ .. }` matches unit, tuple and struct variants alike
    let name_arms = variants.iter().map(|v| {
        let variant_name = &v.ident;
        let variant_str = variant_name.to_string();
        quote! { #name::#variant_name { .. } => #variant_str }
    });

    let mut expanded = quote! {
        impl #impl_generics todo_dispatch::Action for #name #ty_generics #where_clause {
            fn name(&self) -> &'static str {
                match self {
                    #(#name_arms,)*
                }
            }
        }
    };

    if variants.iter().any(|v| v.category.is_some()) {
        let category_arms = variants.iter().map(|v| {
            let variant_name = &v.ident;
            let cat_expr = match &v.category {
                Some(c) => quote! { ::core::option::Option::Some(#c) },
                None => quote! { ::core::option::Option::None },
            };
            quote! { #name::#variant_name { .. } => #cat_expr }
        });

        let mut categories: Vec<&String> =
            variants.iter().filter_map(|v| v.category.as_ref()).collect();
        categories.sort();
        categories.dedup();

        let predicates = categories.iter().filter(|_| opts.predicates).map(|cat| {
            let predicate_name = format_ident!("is_{}", cat.replace(['-', ' '], "_"));
            let patterns = variants
                .iter()
                .filter(|v| v.category.as_ref() == Some(*cat))
                .map(|v| {
                    let variant_name = &v.ident;
                    quote! { #name::#variant_name { .. } }
                });
            let doc = format!(
                "Returns true if this action belongs to the `{}` category.",
                cat
            );
            quote! {
                #[doc = #doc]
                pub fn #predicate_name(&self) -> bool {
                    matches!(self, #(#patterns)|*)
                }
            }
        });

        expanded = quote! {
            #expanded

            impl #impl_generics #name #ty_generics #where_clause {
                /// Get the action's category (if categorized)
                pub fn category(&self) -> ::core::option::Option<&'static str> {
                    match self {
                        #(#category_arms,)*
                    }
                }

                #(#predicates)*
            }

            impl #impl_generics todo_dispatch::ActionCategory for #name #ty_generics #where_clause {
                fn category(&self) -> ::core::option::Option<&'static str> {
                    #name::category(self)
                }
            }
        };
    }

    TokenStream::from(expanded)
}
