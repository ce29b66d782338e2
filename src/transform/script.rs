/// Whether `ch` is kana, a CJK unified ideograph, or a halfwidth/fullwidth form.
///
/// Markdown markers glued to these characters without a space are not
/// recognized by most renderers, so the inline toggle pads them.
pub const fn is_cjk_or_fullwidth(ch: char) -> bool {
    matches!(
        ch,
        '\u{3040}'..='\u{309F}' // hiragana
            | '\u{30A0}'..='\u{30FF}' // katakana
            | '\u{4E00}'..='\u{9FAF}' // CJK unified ideographs
            | '\u{FF00}'..='\u{FFEF}' // halfwidth and fullwidth forms
    )
}
