use proc_macro::TokenStream;
use quote::quote;
use syn::{parse_macro_input, Data, DeriveInput, Fields, Type};


fn is_type(ty: &Type, name: &str) -> bool {
    match ty {
        Type::Path(type_path) => type_path.qself.is_none() && type_path.path.is_ident(name),
        _ => false,
    }
}

/// Derive macro to implement `ChannelAttributes` for a parameter struct, giving
/// string keyed access to every `f32` field and every `bool` field (read as `0.` or `1.`,
/// written as `value != 0.`), other fields are skipped
#[proc_macro_derive(ChannelAttributes)]
pub fn derive_channel_attributes(input: TokenStream) -> TokenStream {
    // Parse the input tokens into a syntax tree
    let input = parse_macro_input!(input as DeriveInput);

    // Get the name of the struct we are deriving the trait for
    let name = input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let fields = match input.data {
        Data::Struct(data) => match data.fields {
            Fields::Named(named) => named.named,
            _ => {
                return syn::Error::new_spanned(
                    name, "ChannelAttributes requires a struct with named fields"
                ).to_compile_error().into();
            }
        },
        _ => {
            return syn::Error::new_spanned(
                name, "ChannelAttributes can only be derived for structs"
            ).to_compile_error().into();
        }
    };

    let mut getters = vec![];
    let mut setters = vec![];
    let mut names = vec![];

    for field in fields.iter() {
        let ident = match &field.ident {
            Some(ident) => ident,
            None => continue,
        };
        let key = ident.to_string();

        if is_type(&field.ty, "f32") {
            getters.push(quote! { #key => Some(self.#ident), });
            setters.push(quote! { #key => { self.#ident = value; true }, });
            names.push(key);
        } else if is_type(&field.ty, "bool") {
            getters.push(quote! { #key => Some(if self.#ident { 1.0 } else { 0.0 }), });
            setters.push(quote! { #key => { self.#ident = value != 0.0; true }, });
            names.push(key);
        }
    }

    // Generate the implementation of the trait
    let expanded = quote! {
        impl #impl_generics ChannelAttributes for #name #ty_generics #where_clause {
            fn get_attribute(&self, attribute: &str) -> Option<f32> {
                match attribute {
                    #(#getters)*
                    _ => None,
                }
            }

            fn set_attribute(&mut self, attribute: &str, value: f32) -> bool {
                match attribute {
                    #(#setters)*
                    _ => false,
                }
            }

            fn attribute_names() -> std::collections::HashSet<String> {
                std::collections::HashSet::from([
                    #(String::from(#names)),*
                ])
            }
        }
    };

    TokenStream::from(expanded)
}
