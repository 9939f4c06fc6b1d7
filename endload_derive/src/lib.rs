mod codec;
mod enumerated;

use darling::FromDeriveInput;
use quote::ToTokens;
use syn::{parse_macro_input, DeriveInput};

use self::codec::ContainerReceiver;
use self::enumerated::EnumReceiver;

#[proc_macro_derive(Encode, attributes(endload))]
pub fn derive_encode(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    ContainerReceiver::from_derive_input(&input)
        .and_then(|receiver| receiver.validate())
        .map(|data| data.encode_impl().into_token_stream())
        .unwrap_or_else(|error| error.write_errors())
        .into()
}

#[proc_macro_derive(Decode, attributes(endload))]
pub fn derive_decode(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    ContainerReceiver::from_derive_input(&input)
        .and_then(|receiver| receiver.validate())
        .map(|data| data.decode_impl().into_token_stream())
        .unwrap_or_else(|error| error.write_errors())
        .into()
}

#[proc_macro_derive(Enumerated, attributes(endload))]
pub fn derive_enumerated(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    EnumReceiver::from_derive_input(&input)
        .and_then(|receiver| receiver.validate())
        .map(|data| data.enumerated_impl().into_token_stream())
        .unwrap_or_else(|error| error.write_errors())
        .into()
}

fn from_syn_error(err: syn::Error) -> darling::Error {
    darling::Error::custom(&err).with_span(&err.span())
}
