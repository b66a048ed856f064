use litrs::IntegerLit;
use proc_macro2::{Group, Literal, Span, TokenStream, TokenTree};
use quote::{format_ident, quote_spanned};
use syn::parse::{Parse, ParseBuffer, Parser};
use syn::{parenthesized, parse_quote, token, Error, LitInt, Path, Result, Token};

const MAX_WIDTH: u32 = 64;

#[proc_macro]
pub fn xint(tokens: proc_macro::TokenStream) -> proc_macro::TokenStream {
    xint_impl(tokens.into()).into()
}

#[proc_macro_attribute]
pub fn xint_literals(
    attr: proc_macro::TokenStream,
    item: proc_macro::TokenStream,
) -> proc_macro::TokenStream {
    xint_literals_impl(attr.into(), item.into()).into()
}

struct XintInput {
    _paren_token: token::Paren,
    crate_path: Path,
    _comma_token: Token![,],
    minus_token: Option<Token![-]>,
    lit: LitInt,
}

impl Parse for XintInput {
    fn parse(input: &ParseBuffer) -> Result<Self> {
        let content;
        Ok(Self {
            _paren_token: parenthesized!(content in input),
            crate_path: content.parse()?,
            _comma_token: content.parse()?,
            minus_token: content.parse()?,
            lit: content.parse()?,
        })
    }
}

fn xint_impl(tokens: TokenStream) -> TokenStream {
    let input: XintInput = match syn::parse2(tokens) {
        Ok(input) => input,
        Err(e) => return e.into_compile_error(),
    };
    let negative = input.minus_token.is_some();
    match rewrite_literal(&input.crate_path, input.lit.token(), negative) {
        RewriteResult::Rewritten(tokens) => tokens,
        RewriteResult::UnrecognizedSuffix(literal) => Error::new(
            literal.span(),
            "literal must have a suffix: 'U' or 'I' followed by an integer in 1..=64",
        )
        .into_compile_error(),
        RewriteResult::ValueError(e) => e.into_compile_error(),
    }
}

enum RewriteResult {
    Rewritten(TokenStream),
    UnrecognizedSuffix(Literal),
    ValueError(Error),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Suffix {
    signed: bool,
    width: u32,
}

impl Suffix {
    fn type_name(self, span: Span) -> proc_macro2::Ident {
        let prefix = if self.signed { 'I' } else { 'U' };
        format_ident!("{prefix}{}", self.width, span = span)
    }

    /// Largest magnitude a literal of this type may have with the given sign.
    fn max_magnitude(self, negative: bool) -> u128 {
        let value_bits = if self.signed { self.width - 1 } else { self.width };
        let limit = 1u128 << value_bits;
        if negative {
            limit
        } else {
            limit - 1
        }
    }

    /// Two's complement bit pattern of the value, in the low `width` bits.
    fn pattern(self, magnitude: u128, negative: bool) -> u64 {
        let mask = (1u128 << self.width) - 1;
        let bits = if negative {
            magnitude.wrapping_neg()
        } else {
            magnitude
        };
        // Masked to at most 64 bits.
        (bits & mask) as u64
    }
}

fn rewrite_literal(crate_path: &Path, literal: Literal, negative: bool) -> RewriteResult {
    // Only rewrite integer literals with a recognized suffix.
    let Ok(integer_lit) = IntegerLit::try_from(literal.clone()) else {
        return RewriteResult::UnrecognizedSuffix(literal);
    };
    let Some(suffix) = parse_suffix(integer_lit.suffix()) else {
        return RewriteResult::UnrecognizedSuffix(literal);
    };
    let span = literal.span();
    let type_name = suffix.type_name(span);

    // Parse the value and enforce bounds.
    let Some(magnitude) = integer_lit.value::<u128>() else {
        return RewriteResult::ValueError(Error::new(span, "could not parse integer literal"));
    };
    if negative && !suffix.signed && magnitude != 0 {
        return RewriteResult::ValueError(Error::new(
            span,
            format!("negative integer literal out of range for {type_name}"),
        ));
    }
    if magnitude > suffix.max_magnitude(negative) {
        let sign = if negative { "-" } else { "" };
        return RewriteResult::ValueError(Error::new(
            span,
            format!("integer literal value {sign}{magnitude} out of range for {type_name}"),
        ));
    }

    // Build the rewritten literal.
    let mut new_literal = Literal::u64_unsuffixed(suffix.pattern(magnitude, negative));
    new_literal.set_span(span);
    RewriteResult::Rewritten(
        quote_spanned! {span=> #crate_path::types::#type_name::from_bits(#new_literal) },
    )
}

fn parse_suffix(suffix: &str) -> Option<Suffix> {
    let signed = match suffix.chars().next()? {
        'U' => false,
        'I' => true,
        _ => return None,
    };
    let width: u32 = suffix[1..].parse().ok()?;
    if width < 1 || width > MAX_WIDTH {
        return None;
    }
    Some(Suffix { signed, width })
}

/// Applies `f` to every literal in `stream`, descending into groups.
fn rewrite_literals(
    stream: TokenStream,
    f: &mut impl FnMut(Literal) -> TokenStream,
) -> TokenStream {
    let mut output = TokenStream::new();
    for tt in stream {
        match tt {
            TokenTree::Group(group) => {
                let mut new_group =
                    Group::new(group.delimiter(), rewrite_literals(group.stream(), f));
                new_group.set_span(group.span());
                output.extend([TokenTree::Group(new_group)]);
            }
            TokenTree::Literal(literal) => output.extend(f(literal)),
            tt => output.extend([tt]),
        }
    }
    output
}

/// Parses the attribute arguments, returning the crate path to emit and any
/// error in the arguments.
fn parse_crate_path(attr: TokenStream) -> (Path, Option<Error>) {
    let mut crate_path: Option<Path> = None;
    let error = {
        let parser = syn::meta::parser(|meta| {
            if meta.path.is_ident("crate_path") {
                crate_path = Some(meta.value()?.parse()?);
                Ok(())
            } else {
                Err(meta.error("unsupported property"))
            }
        });
        if attr.is_empty() {
            None
        } else {
            parser.parse2(attr).err()
        }
    };
    (crate_path.unwrap_or_else(|| parse_quote! { ::xint }), error)
}

fn xint_literals_impl(attr: TokenStream, item: TokenStream) -> TokenStream {
    let (crate_path, attr_error) = parse_crate_path(attr);
    let mut result = attr_error
        .map(Error::into_compile_error)
        .unwrap_or_default();

    result.extend(rewrite_literals(item, &mut |literal| {
        match rewrite_literal(&crate_path, literal, false) {
            RewriteResult::Rewritten(tokens) => tokens,
            RewriteResult::UnrecognizedSuffix(literal) => TokenTree::Literal(literal).into(),
            RewriteResult::ValueError(e) => e.into_compile_error(),
        }
    }));

    result
}

#[cfg(test)]
mod tests {
    use quote::quote;
    use syn::{Expr, File};

    use super::{parse_suffix, xint_impl, xint_literals_impl, Suffix};

    fn expand_expr(tokens: proc_macro2::TokenStream) -> Expr {
        syn::parse2::<Expr>(xint_impl(tokens)).unwrap()
    }

    fn is_compile_error(tokens: proc_macro2::TokenStream) -> bool {
        xint_impl(tokens).to_string().contains("compile_error")
    }

    #[test]
    fn xint_unsigned() {
        assert_eq!(
            expand_expr(quote! { (some::path::to, 7_U3) }),
            syn::parse2::<Expr>(quote! { some::path::to::types::U3::from_bits(7) }).unwrap(),
        );
    }

    #[test]
    fn xint_signed() {
        assert_eq!(
            expand_expr(quote! { (some::path::to, 3_I3) }),
            syn::parse2::<Expr>(quote! { some::path::to::types::I3::from_bits(3) }).unwrap(),
        );
        assert_eq!(
            expand_expr(quote! { (some::path::to, -4_I3) }),
            syn::parse2::<Expr>(quote! { some::path::to::types::I3::from_bits(4) }).unwrap(),
        );
        assert_eq!(
            expand_expr(quote! { (some::path::to, -1_I3) }),
            syn::parse2::<Expr>(quote! { some::path::to::types::I3::from_bits(7) }).unwrap(),
        );
    }

    #[test]
    fn xint_full_width() {
        assert_eq!(
            expand_expr(quote! { (x, 0xffff_ffff_ffff_ffff_U64) }),
            syn::parse2::<Expr>(quote! { x::types::U64::from_bits(18446744073709551615) })
                .unwrap(),
        );
        assert_eq!(
            expand_expr(quote! { (x, -9223372036854775808_I64) }),
            syn::parse2::<Expr>(quote! { x::types::I64::from_bits(9223372036854775808) })
                .unwrap(),
        );
    }

    #[test]
    fn xint_negative_zero() {
        assert_eq!(
            expand_expr(quote! { (x, -0_U4) }),
            syn::parse2::<Expr>(quote! { x::types::U4::from_bits(0) }).unwrap(),
        );
        assert_eq!(
            expand_expr(quote! { (x, -0_I1) }),
            syn::parse2::<Expr>(quote! { x::types::I1::from_bits(0) }).unwrap(),
        );
    }

    #[test]
    fn xint_out_of_range() {
        assert!(is_compile_error(quote! { (x, 8_U3) }));
        assert!(is_compile_error(quote! { (x, 4_I3) }));
        assert!(is_compile_error(quote! { (x, -5_I3) }));
        assert!(is_compile_error(quote! { (x, -1_U3) }));
        assert!(is_compile_error(quote! { (x, 1_I1) }));
        assert!(is_compile_error(quote! { (x, 18446744073709551616_U64) }));
    }

    #[test]
    fn xint_bad_suffix() {
        assert!(is_compile_error(quote! { (x, 1_U0) }));
        assert!(is_compile_error(quote! { (x, 1_U65) }));
        assert!(is_compile_error(quote! { (x, 1_u8) }));
        assert!(is_compile_error(quote! { (x, 1) }));
    }

    #[test]
    fn suffix_parsing() {
        assert_eq!(parse_suffix("U1"), Some(Suffix { signed: false, width: 1 }));
        assert_eq!(parse_suffix("I64"), Some(Suffix { signed: true, width: 64 }));
        assert_eq!(parse_suffix("I65"), None);
        assert_eq!(parse_suffix("X8"), None);
        assert_eq!(parse_suffix(""), None);
    }

    fn expand_file(attr: proc_macro2::TokenStream, item: proc_macro2::TokenStream) -> File {
        syn::parse2::<File>(xint_literals_impl(attr, item)).unwrap()
    }

    #[test]
    fn xint_literals_simple() {
        assert_eq!(
            expand_file(quote! {}, quote! { fn foo() -> I24 { -(1234567_I24) + 5 } }),
            syn::parse2::<File>(quote! {
                fn foo() -> I24 { -(::xint::types::I24::from_bits(1234567)) + 5 }
            })
            .unwrap(),
        );
    }

    #[test]
    fn xint_literals_with_crate_path() {
        assert_eq!(
            expand_file(
                quote! { crate_path = path::to::xint_crate },
                quote! { fn foo() { 1234567_U24 } },
            ),
            syn::parse2::<File>(quote! {
                fn foo() { path::to::xint_crate::types::U24::from_bits(1234567) }
            })
            .unwrap(),
        );
    }

    #[test]
    fn xint_literals_reports_range_errors() {
        let output = xint_literals_impl(quote! {}, quote! { fn foo() { 65536_U16 } });
        assert!(output.to_string().contains("compile_error"));
    }

    #[test]
    fn xint_literals_reports_unsupported_property() {
        let output = xint_literals_impl(quote! { path = x }, quote! { fn foo() { 1_U1 } });
        let output = output.to_string();
        assert!(output.contains("unsupported property"));
        assert!(output.contains("from_bits"));
    }
}
