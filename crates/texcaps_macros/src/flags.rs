use proc_macro2::*;
use quote::quote;
use syn::{punctuated::Punctuated, *};

struct CommaSeparatedList {
	list: Punctuated::<Ident, Token![,]>
}

impl syn::parse::Parse for CommaSeparatedList {
	fn parse(input: parse::ParseStream) -> Result<Self> {
		let list = Punctuated::parse_terminated(input)?;
		Ok(Self { list })
	}
}

fn bits_expr(expr: &Expr, base_type: &Ident) -> core::result::Result<TokenStream, TokenStream> {
	match expr {
		Expr::Lit(ExprLit { lit: Lit::Int(lit), .. }) => Ok(quote!((#lit as #base_type))),
		Expr::Path(path) => match path.path.get_ident() {
			Some(ident) => Ok(quote!(Self::#ident.bits)),
			None => Err(quote!(compile_error!("Only single identifiers are allowed in flag values");)),
		},
		Expr::Paren(paren) => bits_expr(&paren.expr, base_type),
		Expr::Binary(ExprBinary { left, right, op: BinOp::BitOr(_), .. }) => {
			let left = bits_expr(left, base_type)?;
			let right = bits_expr(right, base_type)?;
			Ok(quote!((#left | #right)))
		},
		_ => Err(quote!(compile_error!("Only integer literals, identifiers or `|` combinations are supported");)),
	}
}

fn smallest_base_type(max_val: u128) -> &'static str {
	if max_val <= u8::MAX as u128 {
		"u8"
	} else if max_val <= u16::MAX as u128 {
		"u16"
	} else if max_val <= u32::MAX as u128 {
		"u32"
	} else if max_val <= u64::MAX as u128 {
		"u64"
	} else {
		"u128"
	}
}

pub fn flags(args: TokenStream, input: TokenStream) -> TokenStream {
	let input_parsed = match syn::parse2::<DeriveInput>(input) {
	    Ok(derived_input) => derived_input,
	    Err(err) => return err.to_compile_error(),
	};

	let vis = input_parsed.vis;
	let flag_name = input_parsed.ident;
	let enum_attrs = input_parsed.attrs;

	let body_data = match input_parsed.data {
		Data::Enum(body) => body,
		_ => return quote!( compile_error!("Not an enum"); )
	};

	let explicit_base = match parse2::<CommaSeparatedList>(args) {
		Ok(data) => data.list.into_iter().find(|ident| ["u8", "u16", "u32", "u64", "u128"].iter().any(|ty| ident == ty)),
		Err(err) => return err.to_compile_error(),
	};

	// First pass: figure out the values that are known up front, so the base type can be chosen
	let mut next_bit = 0u32;
	let mut max_val = 0u128;
	let mut none_name = None;
	let mut values = Vec::with_capacity(body_data.variants.len());
	for variant in &body_data.variants {
		match &variant.discriminant {
			Some((_, Expr::Lit(ExprLit { lit: Lit::Int(lit), .. }))) => {
				let val = match lit.base10_parse::<u128>() {
					Ok(val) => val,
					Err(err) => return err.to_compile_error(),
				};
				if val == 0 {
					none_name = Some(variant.ident.clone());
				} else {
					max_val = max_val.max(val);
					if val.is_power_of_two() {
						next_bit = val.trailing_zeros() + 1;
					}
				}
				values.push(None);
			},
			Some((_, expr)) => values.push(Some(expr.clone())),
			None => {
				if next_bit >= 128 {
					return quote!( compile_error!("Too many flags, at most 128 flags are supported"); );
				}
				let val = 1u128 << next_bit;
				max_val = max_val.max(val);
				next_bit += 1;
				values.push(Some(Expr::Lit(ExprLit {
					attrs: Vec::new(),
					lit: Lit::Int(LitInt::new(&val.to_string(), Span::call_site())),
				})));
			},
		}
	}

	let base_type = explicit_base.unwrap_or_else(|| Ident::new(smallest_base_type(max_val), Span::call_site()));

	let mut idents = Vec::with_capacity(body_data.variants.len());
	let mut attrs = Vec::with_capacity(body_data.variants.len());
	let mut vals = Vec::with_capacity(body_data.variants.len());
	for (variant, value) in body_data.variants.iter().zip(values) {
		let expr = match (value, &variant.discriminant) {
			(Some(expr), _) => expr,
			(None, Some((_, expr))) => expr.clone(),
			(None, None) => unreachable!("variants without a discriminant always get a value"),
		};
		match bits_expr(&expr, &base_type) {
			Ok(bits) => vals.push(bits),
			Err(err) => return err,
		}
		idents.push(variant.ident.clone());
		attrs.push(variant.attrs.clone());
	}

	let none_const = match &none_name {
		Some(_) => quote!(),
		None => quote!(
			/// Value representing that no flag is set.
			#vis const None : #flag_name = #flag_name::none();
		),
	};
	let none_str = none_name.map_or_else(|| "None".to_string(), |ident| ident.to_string());

	quote!(
		#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
		#(#enum_attrs)*
		#[repr(transparent)]
		#vis struct #flag_name {
			bits : #base_type
		}

		#[allow(non_upper_case_globals)]
		impl #flag_name {
			#none_const

			#(#(#attrs)* #vis const #idents : #flag_name = #flag_name { bits: #vals };)*

			/// Create flags instance with no flag set.
			#vis const fn none() -> Self {
				Self { bits: 0 }
			}

			/// Create flags instance with all valid flags set.
			#vis const fn all() -> Self {
				Self { bits: 0 #( | #flag_name::#idents.bits)* }
			}

			/// Create flags from raw bits, unknown bits are dropped.
			#vis const fn from_bits_truncate(bits: #base_type) -> Self {
				Self { bits: bits & Self::all().bits }
			}

			/// Get the flags' bits
			#vis const fn bits(&self) -> #base_type {
				self.bits
			}

			/// Check if a given flag(s) is/are set (if multiple flags are checked, all flags need to be set).
			#vis const fn contains(&self, flag: #flag_name) -> bool {
				self.bits & flag.bits == flag.bits
			}

			/// Check if any of the given flags are set.
			#vis const fn intersects(&self, flag: #flag_name) -> bool {
				self.bits & flag.bits != 0
			}

			/// Check if no flag is set.
			#vis const fn is_none(&self) -> bool {
				self.bits == 0
			}

			/// Check if any flag is set.
			#vis const fn is_any(&self) -> bool {
				self.bits != 0
			}

			/// Set the state of a given flag to `set`.
			#vis fn set(&mut self, flag: #flag_name, set: bool) {
				if set {
					self.bits |= flag.bits;
				} else {
					self.bits &= !flag.bits;
				}
			}

			/// Enable a given flag.
			#vis fn enable(&mut self, flag: #flag_name) {
				self.bits |= flag.bits;
			}

			/// Disable a given flag.
			#vis fn disable(&mut self, flag: #flag_name) {
				self.bits &= !flag.bits;
			}

			/// Const implementation of bitor
			#vis const fn bitor(self, rhs: Self) -> Self {
				Self { bits: self.bits | rhs.bits }
			}

			/// Const implementation of bitand
			#vis const fn bitand(self, rhs: Self) -> Self {
				Self { bits: self.bits & rhs.bits }
			}
		}

		impl ::core::ops::Not for #flag_name {
			type Output = Self;
			fn not(self) -> Self {
				Self { bits: !self.bits & Self::all().bits }
			}
		}

		impl ::core::ops::BitAnd for #flag_name {
			type Output = Self;
			fn bitand(self, rhs: Self) -> Self {
				Self { bits: self.bits & rhs.bits }
			}
		}

		impl ::core::ops::BitAndAssign for #flag_name {
			fn bitand_assign(&mut self, rhs: Self) {
				self.bits &= rhs.bits;
			}
		}

		impl ::core::ops::BitOr for #flag_name {
			type Output = Self;
			fn bitor(self, rhs: Self) -> Self {
				Self { bits: self.bits | rhs.bits }
			}
		}

		impl ::core::ops::BitOrAssign for #flag_name {
			fn bitor_assign(&mut self, rhs: Self) {
				self.bits |= rhs.bits;
			}
		}

		impl Default for #flag_name {
			fn default() -> #flag_name {
				#flag_name::none()
			}
		}

		impl ::core::fmt::Debug for #flag_name {
			fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
				if self.is_none() {
					return f.write_str(#none_str);
				}

				let mut remaining = *self;
				let mut started = false;
				#(
					if #flag_name::#idents.bits != 0 && remaining.contains(#flag_name::#idents) {
						if started {
							f.write_str(" | ")?;
						}
						f.write_str(stringify!(#idents))?;
						remaining.bits &= !#flag_name::#idents.bits;
						started = true;
					}
				)*

				if remaining.is_any() {
					if started {
						f.write_str(" | ")?;
					}
					write!(f, "{:#x}", remaining.bits)?;
				}
				Ok(())
			}
		}

		impl ::core::fmt::Display for #flag_name {
			fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
				::core::fmt::Debug::fmt(self, f)
			}
		}
	)
}
