use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::{Error, ItemFn, ReturnType};

pub(crate) fn test_case(args: TokenStream, item: TokenStream) -> TokenStream {
    if !args.is_empty() {
        return Error::new_spanned(&args, "#[test_case] does not accept arguments")
            .to_compile_error();
    }

    let item = match syn::parse2::<ItemFn>(item) {
        Ok(item) => item,
        Err(err) => return err.to_compile_error(),
    };

    if !item.sig.generics.params.is_empty() {
        return Error::new_spanned(
            &item.sig.generics,
            "test functions cannot take generic parameters",
        )
        .to_compile_error();
    }
    if !item.sig.inputs.is_empty() {
        return Error::new_spanned(&item.sig.inputs, "test functions cannot take arguments")
            .to_compile_error();
    }
    if let Some(asyncness) = &item.sig.asyncness {
        return Error::new_spanned(asyncness, "test functions cannot be async")
            .to_compile_error();
    }
    if let ReturnType::Type(_, ty) = &item.sig.output {
        return Error::new_spanned(ty, "test functions cannot have a return type")
            .to_compile_error();
    }

    let ident = &item.sig.ident;
    let name = ident.to_string();
    let entry_ident = format_ident!("__MINICHECK_ENTRY_{}", name.to_uppercase());

    quote! {
        #item

        ::minicheck::__test_case_entry! {
            #[allow(non_upper_case_globals)]
            static #entry_ident: ::minicheck::TestEntry =
                ::minicheck::TestEntry::new(#name, #ident);
        }
    }
}
