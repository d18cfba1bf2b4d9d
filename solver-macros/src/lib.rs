//! Procedural macros for the advent-solver library

use proc_macro::TokenStream;
use quote::quote;
use syn::{DeriveInput, Lit, parse_macro_input};

/// Derive macro generating the `Solver` impl from `PartSolver` impls
///
/// Reads the part count from the `#[day_solver(parts = N)]` attribute and
/// generates a `Solver` implementation whose `solve_part` dispatches part
/// `n` to `<Self as PartSolver<n>>::solve`. The type must implement
/// `InputParser` and `PartSolver<N>` for every `N` in `1..=parts`; a
/// missing part impl is a compile-time error.
///
/// # Example
///
/// ```ignore
/// #[derive(DaySolver)]
/// #[day_solver(parts = 2)]
/// struct Solver;
///
/// impl InputParser for Solver { /* ... */ }
/// impl PartSolver<1> for Solver { /* ... */ }
/// impl PartSolver<2> for Solver { /* ... */ }
/// ```
#[proc_macro_derive(DaySolver, attributes(day_solver))]
pub fn derive_day_solver(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    let name = &input.ident;

    let attr = input
        .attrs
        .iter()
        .find(|attr| attr.path().is_ident("day_solver"))
        .expect("DaySolver derive macro requires #[day_solver(...)] attribute");

    let mut parts: Option<u8> = None;

    attr.parse_nested_meta(|meta| {
        if meta.path.is_ident("parts") {
            let value: Lit = meta.value()?.parse()?;
            if let Lit::Int(lit_int) = value {
                parts = Some(lit_int.base10_parse()?);
            }
        }
        Ok(())
    })
    .expect("Failed to parse #[day_solver(...)] attribute");

    let parts = parts.expect("Missing required 'parts' attribute");
    if parts == 0 {
        panic!("'parts' must be at least 1");
    }

    let arms = (1..=parts).map(|n| {
        quote! {
            #n => <#name as ::advent_solver::PartSolver<#n>>::solve(input),
        }
    });

    let expanded = quote! {
        impl ::advent_solver::Solver for #name {
            const PARTS: u8 = #parts;

            fn solve_part(
                input: &mut <Self as ::advent_solver::InputParser>::Input<'_>,
                part: u8,
            ) -> ::std::result::Result<::std::string::String, ::advent_solver::SolveError> {
                match part {
                    #(#arms)*
                    other => ::std::result::Result::Err(
                        ::advent_solver::SolveError::PartNotImplemented(other),
                    ),
                }
            }
        }
    };

    TokenStream::from(expanded)
}

/// Derive macro for automatically registering solvers with the plugin system
///
/// Generates an `inventory::submit!` entry so the solver is discovered and
/// registered automatically.
///
/// # Attributes
///
/// - `day`: Required. The day number (1-25)
/// - `tags`: Optional. Array of string literals for filtering (e.g., ["grid"])
///
/// # Requirements
///
/// The type must implement the `Solver` trait (usually via the `DaySolver`
/// derive). A missing impl is reported as an unsatisfied trait bound at
/// compile time.
///
/// # Example
///
/// ```ignore
/// #[derive(DaySolver, RegisterSolver)]
/// #[day_solver(parts = 2)]
/// #[puzzle(day = 4, tags = ["grid", "search"])]
/// struct Solver;
/// ```
#[proc_macro_derive(RegisterSolver, attributes(puzzle))]
pub fn derive_register_solver(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    let name = &input.ident;

    let attr = input
        .attrs
        .iter()
        .find(|attr| attr.path().is_ident("puzzle"))
        .expect("RegisterSolver derive macro requires #[puzzle(...)] attribute");

    let mut day: Option<u8> = None;
    let mut tags: Vec<String> = Vec::new();

    attr.parse_nested_meta(|meta| {
        if meta.path.is_ident("day") {
            let value: Lit = meta.value()?.parse()?;
            if let Lit::Int(lit_int) = value {
                day = Some(lit_int.base10_parse()?);
            }
        } else if meta.path.is_ident("tags") {
            // Parse array of string literals: tags = ["a", "b"]
            let _ = meta.value()?;
            let content;
            syn::bracketed!(content in meta.input);
            while !content.is_empty() {
                let lit: Lit = content.parse()?;
                if let Lit::Str(lit_str) = lit {
                    tags.push(lit_str.value());
                }
                if content.peek(syn::Token![,]) {
                    let _: syn::Token![,] = content.parse()?;
                }
            }
        }
        Ok(())
    })
    .expect("Failed to parse #[puzzle(...)] attribute");

    let day = day.expect("Missing required 'day' attribute");

    let tags_array = if tags.is_empty() {
        quote! { &[] }
    } else {
        let tag_strs = tags.iter().map(|s| s.as_str());
        quote! { &[#(#tag_strs),*] }
    };

    let expanded = quote! {
        // Compile-time check that the type implements the Solver trait,
        // giving a clearer error than a failure inside inventory::submit!
        const _: () = {
            trait MustImplementSolver: ::advent_solver::Solver {}
            impl MustImplementSolver for #name {}
        };

        ::advent_solver::inventory::submit! {
            ::advent_solver::SolverPlugin {
                day: #day,
                solver: &#name,
                tags: #tags_array,
            }
        }
    };

    TokenStream::from(expanded)
}
