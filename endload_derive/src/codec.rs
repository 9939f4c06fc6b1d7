use darling::util::Ignored;
use darling::{ast, Error, FromDeriveInput, FromField};
use proc_macro2::{Span, TokenStream};
use quote::{format_ident, quote};
use syn::parse_quote;

#[derive(FromDeriveInput)]
#[darling(attributes(endload), supports(struct_any))]
pub struct ContainerReceiver {
    ident: syn::Ident,
    generics: syn::Generics,
    data: ast::Data<Ignored, FieldReceiver>,

    #[darling(default)]
    crate_path: Option<syn::Path>,
}

pub struct ContainerData {
    ident: syn::Ident,
    generics: syn::Generics,
    crate_path: syn::Path,
    style: ast::Style,
    fields: Vec<FieldData>,
}

impl ContainerReceiver {
    pub fn validate(&self) -> Result<ContainerData, Error> {
        let mut errors = Vec::new();

        let crate_path = self
            .crate_path
            .clone()
            .unwrap_or_else(|| parse_quote!(endload));

        let fields = match &self.data {
            ast::Data::Struct(fields) => fields,
            ast::Data::Enum(..) => {
                return Err(Error::custom(
                    "`Encode` and `Decode` can only be derived for structs; use `Enumerated` for enums",
                ))
            }
        };

        let style = fields.style;
        let fields = fields
            .iter()
            .enumerate()
            .flat_map(|(index, field)| match field.validate(&crate_path, index) {
                Ok(field) => Some(field),
                Err(error) => {
                    errors.push(error);
                    None
                }
            })
            .collect();

        if errors.is_empty() {
            Ok(ContainerData {
                ident: self.ident.clone(),
                generics: self.generics.clone(),
                crate_path,
                style,
                fields,
            })
        } else {
            Err(Error::multiple(errors))
        }
    }
}

impl ContainerData {
    fn pattern(&self, bindings: impl Iterator<Item = TokenStream>) -> TokenStream {
        match self.style {
            ast::Style::Struct => quote!(Self { #( #bindings, )* }),
            ast::Style::Tuple => quote!(Self( #( #bindings, )* )),
            ast::Style::Unit => quote!(Self),
        }
    }

    pub fn encode_impl(&self) -> TokenStream {
        let Self {
            ident, crate_path, ..
        } = self;
        let (impl_generics, ident_generics, where_clause) = self.generics.split_for_impl();
        let writer_binding = quote!(__endload_writer);

        let destructure = self.pattern(self.fields.iter().map(FieldData::destructure));
        let field_encode_stmt = self
            .fields
            .iter()
            .map(|field| field.encode_stmt(crate_path, &writer_binding));

        quote! {
            impl #impl_generics #crate_path::Encode<()> for #ident #ident_generics
                #where_clause
            {
                #[allow(unused_variables)]
                fn encode<W>(&self, _: (), #writer_binding: &mut W)
                    -> Result<(), #crate_path::Error>
                where
                    W: #crate_path::export::io::Write,
                {
                    let #destructure = self;
                    #( #field_encode_stmt )*
                    Ok(())
                }
            }
        }
    }

    pub fn decode_impl(&self) -> TokenStream {
        let Self {
            ident, crate_path, ..
        } = self;
        let (impl_generics, ident_generics, where_clause) = self.generics.split_for_impl();
        let reader_binding = quote!(__endload_reader);

        let field_decode_stmt = self
            .fields
            .iter()
            .map(|field| field.decode_stmt(crate_path, &reader_binding));
        let construct = self.pattern(self.fields.iter().map(FieldData::destructure));

        quote! {
            impl #impl_generics #crate_path::Decode<()> for #ident #ident_generics
                #where_clause
            {
                #[allow(unused_variables)]
                fn decode<R>(_: (), #reader_binding: &mut R)
                    -> Result<Self, #crate_path::Error>
                where
                    R: #crate_path::export::io::Read,
                {
                    #( #field_decode_stmt )*
                    Ok(#construct)
                }
            }
        }
    }
}

#[derive(FromField)]
#[darling(attributes(endload))]
struct FieldReceiver {
    ident: Option<syn::Ident>,
    ty: syn::Type,

    #[darling(default)]
    order: Option<syn::LitStr>,

    #[darling(default)]
    width: Option<usize>,
}

enum Layout {
    /// Unit context.
    Plain,
    /// Full width, `Order` context.
    Ordered(TokenStream),
    /// `width` bytes through `packed`, with an order marker type.
    Packed { width: usize, marker: TokenStream },
}

struct FieldData {
    stored_ident: Option<syn::Ident>,
    binding: syn::Ident,
    ty: syn::Type,
    layout: Layout,
}

impl FieldReceiver {
    fn validate(&self, crate_path: &syn::Path, index: usize) -> Result<FieldData, Error> {
        let mut errors = Vec::new();

        let stored_ident = self.ident.clone();
        let binding = match &self.ident {
            Some(ident) => ident.clone(),
            None => format_ident!("field_{}", index),
        };

        let order = self.order.as_ref().and_then(|lit| match lit.value().as_str() {
            "big" => Some(("Big", "BigEndian")),
            "little" => Some(("Little", "LittleEndian")),
            "native" => Some(("Native", "NativeEndian")),
            other => {
                errors.push(
                    Error::custom(format!(
                        "unknown byte order `{}`, expected `big`, `little` or `native`",
                        other
                    ))
                    .with_span(lit),
                );
                None
            }
        });

        let width = match self.width {
            Some(width) if !(1..=8).contains(&width) => {
                errors.push(
                    Error::custom(format!("width must be between 1 and 8 bytes, got {}", width))
                        .with_span(&self.ty),
                );
                None
            }
            width => width,
        };

        if self.width.is_some() && self.order.is_none() {
            errors.push(Error::custom("`width` requires an `order`").with_span(&self.ty));
        }

        let layout = match (order, width) {
            (None, _) => Layout::Plain,
            (Some((variant, _)), None) => {
                let variant = syn::Ident::new(variant, Span::call_site());
                Layout::Ordered(quote!(#crate_path::ctx::Order::#variant))
            }
            (Some((_, marker)), Some(width)) => {
                let marker = syn::Ident::new(marker, Span::call_site());
                Layout::Packed {
                    width,
                    marker: quote!(#crate_path::order::#marker),
                }
            }
        };

        if errors.is_empty() {
            Ok(FieldData {
                stored_ident,
                binding,
                ty: self.ty.clone(),
                layout,
            })
        } else {
            Err(Error::multiple(errors))
        }
    }
}

impl FieldData {
    fn destructure(&self) -> TokenStream {
        let Self { binding, .. } = self;
        match &self.stored_ident {
            Some(stored_ident) => quote!(#stored_ident: #binding),
            None => quote!(#binding),
        }
    }

    fn encode_stmt(&self, crate_path: &syn::Path, writer_binding: &TokenStream) -> TokenStream {
        let Self { binding, ty, .. } = self;
        let error_context = format!("error encoding field {}", binding);
        let encode_expr = match &self.layout {
            Layout::Plain => quote! {
                <#ty as #crate_path::Encode<()>>::encode(#binding, (), #writer_binding)
            },
            Layout::Ordered(order) => quote! {
                <#ty as #crate_path::Encode<#crate_path::ctx::Order>>::encode(
                    #binding, #order, #writer_binding
                )
            },
            Layout::Packed { width, marker } => quote! {
                #crate_path::packed::encode::<#ty, #width, #marker, _>(#binding, #writer_binding)
            },
        };
        quote! {
            #encode_expr.map_err(|e| #crate_path::Error::with_context(#error_context, e))?;
        }
    }

    fn decode_stmt(&self, crate_path: &syn::Path, reader_binding: &TokenStream) -> TokenStream {
        let Self { binding, ty, .. } = self;
        let error_context = format!("error decoding field {}", binding);
        let decode_expr = match &self.layout {
            Layout::Plain => quote! {
                <#ty as #crate_path::Decode<()>>::decode((), #reader_binding)
            },
            Layout::Ordered(order) => quote! {
                <#ty as #crate_path::Decode<#crate_path::ctx::Order>>::decode(
                    #order, #reader_binding
                )
            },
            Layout::Packed { width, marker } => quote! {
                #crate_path::packed::decode::<#ty, #width, #marker, _>(#reader_binding)
            },
        };
        quote! {
            let #binding = #decode_expr
                .map_err(|e| #crate_path::Error::with_context(#error_context, e))?;
        }
    }
}
