//! Behavioural properties of the matchers, exercised through the public
//! [`ItemMatcher`](super::ItemMatcher) port.
