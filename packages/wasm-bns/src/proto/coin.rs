/// Coin can hold any amount between -1 billion and +1 billion
/// at steps of 10^-9. It is a fixed-point decimal
/// representation and uses integers to avoid rounding
/// associated with floats.
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Coin {
    /// Whole coins, -10^15 < integer < 10^15
    #[prost(int64, tag = "1")]
    pub whole: i64,
    /// Billionth of coins. 0 <= abs(fractional) < 10^9
    #[prost(int64, tag = "2")]
    pub fractional: i64,
    /// Ticker is 3-4 upper-case letters
    #[prost(string, tag = "3")]
    pub ticker: ::prost::alloc::string::String,
}
