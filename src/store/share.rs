use url::Url;

use super::StoreError;

/// Query parameter carrying the markdown text.
pub const TEXT_PARAM: &str = "markdown";

/// Builds and reads share URLs that carry the editor text.
#[derive(Debug, Clone)]
pub struct ShareUrl {
    base: Url,
}

impl ShareUrl {
    /// Use `base` (e.g. the editor's public address) for generated links.
    pub fn parse(base: &str) -> Result<Self, StoreError> {
        Ok(Self {
            base: Url::parse(base)?,
        })
    }

    /// A link to the base URL whose only query parameter is the text.
    pub fn encode(&self, text: &str) -> String {
        let mut url = self.base.clone();
        url.query_pairs_mut().clear().append_pair(TEXT_PARAM, text);
        url.into()
    }

    /// The text carried by `url`, if any.
    pub fn decode(url: &str) -> Result<Option<String>, StoreError> {
        let url = Url::parse(url)?;
        Ok(url
            .query_pairs()
            .find(|(key, _)| key == TEXT_PARAM)
            .map(|(_, value)| value.into_owned()))
    }

    /// Split a share link into its text and the address left once the text
    /// is taken out. An empty text parameter counts as no text.
    pub fn take_text(url: &str) -> Result<(Option<String>, String), StoreError> {
        let text = Self::decode(url)?.filter(|text| !text.is_empty());
        Ok((text, Self::without_text(url)?))
    }

    /// `url` with the text parameter removed, other parameters kept.
    pub fn without_text(url: &str) -> Result<String, StoreError> {
        let mut url = Url::parse(url)?;
        let kept: Vec<(String, String)> = url
            .query_pairs()
            .filter(|(key, _)| key != TEXT_PARAM)
            .map(|(key, value)| (key.into_owned(), value.into_owned()))
            .collect();
        if kept.is_empty() {
            url.set_query(None);
        } else {
            url.query_pairs_mut().clear().extend_pairs(kept);
        }
        Ok(url.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "https://example.com/unimark/";

    #[test]
    fn test_encode_sets_markdown_param() {
        let share = ShareUrl::parse(BASE).unwrap();
        let url = share.encode("# Hi there");
        assert_eq!(url, "https://example.com/unimark/?markdown=%23+Hi+there");
    }

    #[test]
    fn test_encode_replaces_existing_query() {
        let share = ShareUrl::parse("https://example.com/?markdown=old&x=1").unwrap();
        assert_eq!(share.encode("new"), "https://example.com/?markdown=new");
    }

    #[test]
    fn test_decode_recovers_multiline_unicode_text() {
        let share = ShareUrl::parse(BASE).unwrap();
        let text = "これは**太字**\n- a & b\n";
        let url = share.encode(text);
        assert_eq!(ShareUrl::decode(&url).unwrap().as_deref(), Some(text));
    }

    #[test]
    fn test_decode_without_param_is_none() {
        assert_eq!(ShareUrl::decode(BASE).unwrap(), None);
    }

    #[test]
    fn test_decode_rejects_garbage() {
        assert!(matches!(
            ShareUrl::decode("not a url"),
            Err(StoreError::Url(_))
        ));
    }

    #[test]
    fn test_without_text_drops_only_markdown() {
        assert_eq!(
            ShareUrl::without_text("https://example.com/p?markdown=x#top").unwrap(),
            "https://example.com/p#top"
        );
        assert_eq!(
            ShareUrl::without_text("https://example.com/p?a=1&markdown=x").unwrap(),
            "https://example.com/p?a=1"
        );
    }

    #[test]
    fn test_take_text_returns_text_and_clean_address() {
        let (text, rest) =
            ShareUrl::take_text("https://example.com/p?markdown=%23+Hi&a=1").unwrap();
        assert_eq!(text.as_deref(), Some("# Hi"));
        assert_eq!(rest, "https://example.com/p?a=1");
    }

    #[test]
    fn test_take_text_treats_empty_param_as_missing() {
        let (text, rest) = ShareUrl::take_text("https://example.com/?markdown=").unwrap();
        assert_eq!(text, None);
        assert_eq!(rest, "https://example.com/");
    }
}
