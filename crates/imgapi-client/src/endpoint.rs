//! Endpoint table for the imgapi service
//!
//! Every remote operation is a GET against a fixed path with a fixed, ordered
//! list of query parameters. The named client methods are generated from this
//! table, so adding an endpoint means adding a variant here and a line to
//! [`for_each_image_endpoint!`].

use std::fmt;

use crate::constants::{api_path, query_param};

/// A remote imgapi endpoint
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Endpoint {
    Ping,
    Stats,
    Religion,
    Beautiful,
    Fear,
    Sacred,
    Painting,
    Color,
    Delete,
    Garbage,
    Tom,
    Bed,
    Crush,
    Dipshit,
    Picture,
    Tweet,
    Truth,
    Mask,
    Father,
    Achievement,
}

impl Endpoint {
    /// Endpoints returning raw image bytes
    pub const IMAGES: [Endpoint; 18] = [
        Endpoint::Religion,
        Endpoint::Beautiful,
        Endpoint::Fear,
        Endpoint::Sacred,
        Endpoint::Painting,
        Endpoint::Color,
        Endpoint::Delete,
        Endpoint::Garbage,
        Endpoint::Tom,
        Endpoint::Bed,
        Endpoint::Crush,
        Endpoint::Dipshit,
        Endpoint::Picture,
        Endpoint::Tweet,
        Endpoint::Truth,
        Endpoint::Mask,
        Endpoint::Father,
        Endpoint::Achievement,
    ];

    /// Server-side path, always starting with `/`
    pub const fn path(self) -> &'static str {
        match self {
            Endpoint::Ping => api_path::PING,
            Endpoint::Stats => api_path::STATS,
            Endpoint::Religion => api_path::RELIGION,
            Endpoint::Beautiful => api_path::BEAUTIFUL,
            Endpoint::Fear => api_path::FEAR,
            Endpoint::Sacred => api_path::SACRED,
            Endpoint::Painting => api_path::PAINTING,
            Endpoint::Color => api_path::COLOR,
            Endpoint::Delete => api_path::DELETE,
            Endpoint::Garbage => api_path::GARBAGE,
            Endpoint::Tom => api_path::TOM,
            Endpoint::Bed => api_path::BED,
            Endpoint::Crush => api_path::CRUSH,
            Endpoint::Dipshit => api_path::DIPSHIT,
            Endpoint::Picture => api_path::PICTURE,
            Endpoint::Tweet => api_path::TWEET,
            Endpoint::Truth => api_path::TRUTH,
            Endpoint::Mask => api_path::MASK,
            Endpoint::Father => api_path::FATHER,
            Endpoint::Achievement => api_path::ACHIEVEMENT,
        }
    }

    /// Query parameter names, in the order their arguments are passed
    pub const fn params(self) -> &'static [&'static str] {
        use query_param::{AVATAR, COLOR, NO_STATS, TARGET, TEXT};

        match self {
            Endpoint::Ping => &[],
            Endpoint::Stats => &[NO_STATS],
            Endpoint::Color => &[COLOR],
            Endpoint::Dipshit | Endpoint::Tweet => &[TEXT],
            Endpoint::Bed | Endpoint::Crush => &[AVATAR, TARGET],
            Endpoint::Father | Endpoint::Achievement => &[AVATAR, TEXT],
            Endpoint::Religion
            | Endpoint::Beautiful
            | Endpoint::Fear
            | Endpoint::Sacred
            | Endpoint::Painting
            | Endpoint::Delete
            | Endpoint::Garbage
            | Endpoint::Tom
            | Endpoint::Picture
            | Endpoint::Truth
            | Endpoint::Mask => &[AVATAR],
        }
    }

    /// Maximum `text` length the server renders.
    ///
    /// Informational only: the client sends longer text unchanged and leaves
    /// rejection to the server.
    pub const fn text_limit(self) -> Option<usize> {
        match self {
            Endpoint::Tweet => Some(165),
            Endpoint::Father => Some(41),
            Endpoint::Achievement => Some(21),
            _ => None,
        }
    }

    /// Pair parameter names with argument values in order.
    ///
    /// Parameters without a matching argument are left out.
    pub fn query_pairs<'a>(self, args: &[&'a str]) -> Vec<(&'static str, &'a str)> {
        self.params().iter().copied().zip(args.iter().copied()).collect()
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// Invoke `$callback!` with the full list of image endpoints.
///
/// Each entry has the form `method => Variant(arg, ...)` with optional doc
/// attributes in front. The argument names match the endpoint's parameters.
macro_rules! for_each_image_endpoint {
    ($callback:ident) => {
        $callback! {
            religion => Religion(avatar);
            beautiful => Beautiful(avatar);
            fear => Fear(avatar);
            sacred => Sacred(avatar);
            painting => Painting(avatar);
            /// `color` is either a hex value like `#FFFFFF` (the `#` is optional)
            /// or a name like `blue`.
            color => Color(color);
            delete => Delete(avatar);
            garbage => Garbage(avatar);
            tom => Tom(avatar);
            bed => Bed(avatar, target);
            crush => Crush(avatar, target);
            dipshit => Dipshit(text);
            picture => Picture(avatar);
            /// The server renders at most 165 characters of `text`.
            tweet => Tweet(text);
            truth => Truth(avatar);
            mask => Mask(avatar);
            /// The server renders at most 41 characters of `text`.
            father => Father(avatar, text);
            /// The server renders at most 21 characters of `text`.
            achievement => Achievement(avatar, text);
        }
    };
}

pub(crate) use for_each_image_endpoint;

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_paths_are_unique() {
        let mut all = Endpoint::IMAGES.to_vec();
        all.push(Endpoint::Ping);
        all.push(Endpoint::Stats);

        let paths: HashSet<_> = all.iter().map(|e| e.path()).collect();
        assert_eq!(paths.len(), 20);
        assert!(paths.iter().all(|p| p.starts_with('/')));
    }

    #[test]
    fn test_achievement_path() {
        assert_eq!(Endpoint::Achievement.path(), "/achievement");
        assert_eq!(Endpoint::Achievement.params(), &["avatar", "text"]);
    }

    #[test]
    fn test_params() {
        assert!(Endpoint::Ping.params().is_empty());
        assert_eq!(Endpoint::Stats.params(), &["noStats"]);
        assert_eq!(Endpoint::Color.params(), &["color"]);
        assert_eq!(Endpoint::Tweet.params(), &["text"]);
        assert_eq!(Endpoint::Dipshit.params(), &["text"]);
        assert_eq!(Endpoint::Bed.params(), &["avatar", "target"]);
        assert_eq!(Endpoint::Crush.params(), &["avatar", "target"]);
        assert_eq!(Endpoint::Father.params(), &["avatar", "text"]);
        assert_eq!(Endpoint::Mask.params(), &["avatar"]);
    }

    #[test]
    fn test_image_endpoints_take_arguments() {
        for endpoint in Endpoint::IMAGES {
            let arity = endpoint.params().len();
            assert!((1..=2).contains(&arity), "{endpoint} has arity {arity}");
        }
    }

    #[test]
    fn test_text_limits() {
        assert_eq!(Endpoint::Tweet.text_limit(), Some(165));
        assert_eq!(Endpoint::Father.text_limit(), Some(41));
        assert_eq!(Endpoint::Achievement.text_limit(), Some(21));
        assert_eq!(Endpoint::Dipshit.text_limit(), None);
        assert_eq!(Endpoint::Ping.text_limit(), None);
    }

    #[test]
    fn test_query_pairs() {
        assert_eq!(
            Endpoint::Bed.query_pairs(&["me", "you"]),
            vec![("avatar", "me"), ("target", "you")]
        );
        assert_eq!(Endpoint::Bed.query_pairs(&["me"]), vec![("avatar", "me")]);
        assert_eq!(
            Endpoint::Color.query_pairs(&["blue", "extra"]),
            vec![("color", "blue")]
        );
        assert!(Endpoint::Ping.query_pairs(&[]).is_empty());
    }

    #[test]
    fn test_display_is_path() {
        assert_eq!(Endpoint::Tweet.to_string(), "/tweet");
    }
}
