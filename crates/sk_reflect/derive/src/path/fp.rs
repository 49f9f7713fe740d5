//! Full paths of `core` items, so generated code never depends on
//! what the caller has in scope.

use proc_macro2::TokenStream;
use quote::{ToTokens, quote};

macro_rules! define_full_path {
    ($($name:ident => $($seg:ident)::+;)*) => {
        $(
            pub(crate) struct $name;

            impl ToTokens for $name {
                #[inline]
                fn to_tokens(&self, tokens: &mut TokenStream) {
                    quote!($(::$seg)+).to_tokens(tokens);
                }
            }
        )*
    };
}

define_full_path! {
    OptionFP => core::option::Option;
    ResultFP => core::result::Result;
    DefaultFP => core::default::Default;
    PartialEqFP => core::cmp::PartialEq;
    DisplayFP => core::fmt::Display;
    DebugFP => core::fmt::Debug;
    FormatterFP => core::fmt::Formatter;
    FmtResultFP => core::fmt::Result;
    SendFP => core::marker::Send;
    SyncFP => core::marker::Sync;
}
