//! Outbound share-link construction.
//!
//! Builds the fully-formed URLs behind the share panel's target buttons.
//! Escaping matches the `encodeURIComponent` behavior the page's share
//! links were originally written against, so existing shared links keep
//! resolving identically.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Characters `encodeURIComponent` leaves verbatim besides alphanumerics.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

fn encode(raw: &str) -> String {
    utf8_percent_encode(raw, COMPONENT).to_string()
}

/// The social platforms offered by the share panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShareTarget {
    Facebook,
    Twitter,
    LinkedIn,
    WhatsApp,
    Telegram,
}

impl ShareTarget {
    /// All targets, in the order the panel renders them.
    pub const ALL: [ShareTarget; 5] = [
        ShareTarget::Facebook,
        ShareTarget::Twitter,
        ShareTarget::LinkedIn,
        ShareTarget::WhatsApp,
        ShareTarget::Telegram,
    ];

    /// Display name shown on the share button.
    pub fn label(self) -> &'static str {
        match self {
            ShareTarget::Facebook => "Facebook",
            ShareTarget::Twitter => "Twitter",
            ShareTarget::LinkedIn => "LinkedIn",
            ShareTarget::WhatsApp => "WhatsApp",
            ShareTarget::Telegram => "Telegram",
        }
    }

    /// Lowercase identifier used for per-target CSS classes.
    pub fn slug(self) -> &'static str {
        match self {
            ShareTarget::Facebook => "facebook",
            ShareTarget::Twitter => "twitter",
            ShareTarget::LinkedIn => "linkedin",
            ShareTarget::WhatsApp => "whatsapp",
            ShareTarget::Telegram => "telegram",
        }
    }
}

/// Everything an open share panel knows: the selected record's title and
/// image plus the hosting page's address. Independent of the lightbox's
/// current index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareContext {
    pub title: String,
    pub image_ref: String,
    pub page_url: String,
}

impl ShareContext {
    /// The caption attached to text-carrying share targets.
    pub fn caption(&self) -> String {
        format!("Check out this amazing photo: {}", self.title)
    }

    /// Fully-formed outbound URL for the given target.
    pub fn target_url(&self, target: ShareTarget) -> String {
        let url = encode(&self.page_url);
        let text = encode(&self.caption());

        match target {
            ShareTarget::Facebook => format!(
                "https://www.facebook.com/sharer/sharer.php?u={url}&quote={text}"
            ),
            ShareTarget::Twitter => {
                format!("https://twitter.com/intent/tweet?text={text}&url={url}")
            }
            ShareTarget::LinkedIn => format!(
                "https://www.linkedin.com/sharing/share-offsite/?url={url}"
            ),
            // WhatsApp takes caption and url as one text parameter,
            // concatenated before encoding
            ShareTarget::WhatsApp => format!(
                "https://wa.me/?text={}",
                encode(&format!("{} {}", self.caption(), self.page_url))
            ),
            ShareTarget::Telegram => {
                format!("https://t.me/share/url?url={url}&text={text}")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn context() -> ShareContext {
        ShareContext {
            title: "Jaljala Stream".to_string(),
            image_ref: "img/3.jpg".to_string(),
            page_url: "https://pokharalens.com/".to_string(),
        }
    }

    #[test]
    fn test_encode_matches_encode_uri_component() {
        // encodeURIComponent escapes these
        assert_eq!(encode("a b"), "a%20b");
        assert_eq!(encode("a:b/c?d=e&f"), "a%3Ab%2Fc%3Fd%3De%26f");
        assert_eq!(encode("100%"), "100%25");
        // and leaves these alone
        assert_eq!(encode("A-Z_a.z!~*'()"), "A-Z_a.z!~*'()");
    }

    #[test]
    fn test_caption_format() {
        assert_eq!(
            context().caption(),
            "Check out this amazing photo: Jaljala Stream"
        );
    }

    #[test]
    fn test_facebook_url() {
        assert_eq!(
            context().target_url(ShareTarget::Facebook),
            "https://www.facebook.com/sharer/sharer.php\
             ?u=https%3A%2F%2Fpokharalens.com%2F\
             &quote=Check%20out%20this%20amazing%20photo%3A%20Jaljala%20Stream"
        );
    }

    #[test]
    fn test_twitter_url() {
        let url = context().target_url(ShareTarget::Twitter);
        assert!(url.starts_with("https://twitter.com/intent/tweet?text="));
        assert!(url.contains("Check%20out%20this%20amazing%20photo%3A%20Jaljala%20Stream"));
        assert!(url.ends_with("&url=https%3A%2F%2Fpokharalens.com%2F"));
    }

    #[test]
    fn test_linkedin_url_carries_no_caption() {
        assert_eq!(
            context().target_url(ShareTarget::LinkedIn),
            "https://www.linkedin.com/sharing/share-offsite/?url=https%3A%2F%2Fpokharalens.com%2F"
        );
    }

    #[test]
    fn test_whatsapp_encodes_caption_and_url_together() {
        // Caption, a space, then the raw URL - encoded as one component,
        // so the separating space becomes %20 and the URL's slashes %2F
        assert_eq!(
            context().target_url(ShareTarget::WhatsApp),
            "https://wa.me/?text=Check%20out%20this%20amazing%20photo%3A%20Jaljala%20Stream\
             %20https%3A%2F%2Fpokharalens.com%2F"
        );
    }

    #[test]
    fn test_telegram_url() {
        assert_eq!(
            context().target_url(ShareTarget::Telegram),
            "https://t.me/share/url?url=https%3A%2F%2Fpokharalens.com%2F\
             &text=Check%20out%20this%20amazing%20photo%3A%20Jaljala%20Stream"
        );
    }

    #[test]
    fn test_all_targets_have_distinct_slugs() {
        let mut slugs: Vec<_> = ShareTarget::ALL.iter().map(|t| t.slug()).collect();
        slugs.sort_unstable();
        slugs.dedup();
        assert_eq!(slugs.len(), ShareTarget::ALL.len());
    }
}
