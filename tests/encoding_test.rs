use rs_feedrules::{
    article_rules, article_rules_from_bytes, article_rules_from_bytes_with_options,
    articles_from_bytes, articles_from_bytes_with_options, Options,
};

fn latin1_listing() -> Vec<u8> {
    let mut html = b"<html><head><meta charset=\"ISO-8859-1\"></head><body><ul>".to_vec();
    let items: [&[u8]; 4] = [
        b"<li><a href=\"/1\">Caf\xE9 opens on the main square</a><p>Espa\xF1ol breakfast served daily</p></li>",
        b"<li><a href=\"/2\">M\xFCnchen hosts a winter market</a><p>Stalls stay open until late daily</p></li>",
        b"<li><a href=\"/3\">Na\xEFve art exhibition draws crowds</a><p>Over forty painters take part</p></li>",
        b"<li><a href=\"/4\">Cr\xE8me br\xFBl\xE9e contest crowns winner</a><p>Judges tasted sixty desserts</p></li>",
    ];
    for item in items {
        html.extend_from_slice(item);
    }
    html.extend_from_slice(b"</ul></body></html>");
    html
}

/// UTF-8 input decodes without loss.
#[test]
fn utf8_listing_extracts() {
    let html = "<ul>\
        <li><a href=\"/1\">Caf\u{e9} opens on the main square</a></li>\
        <li><a href=\"/2\">\u{4e2d}\u{6587} news of the day here</a></li>\
        <li><a href=\"/3\">M\u{fc}nchen hosts a winter market</a></li>\
        <li><a href=\"/4\">Se\u{f1}or wins the city marathon</a></li>\
    </ul>";

    let records = articles_from_bytes(html.as_bytes());
    assert_eq!(records.len(), 4);
    assert_eq!(records[0].title, "Caf\u{e9} opens on the main square");
    assert!(records[1].title.contains('\u{4e2d}'));
}

/// Declared ISO-8859-1 is transcoded before inference.
#[test]
fn latin1_listing_is_transcoded() {
    let records = articles_from_bytes(&latin1_listing());

    assert_eq!(records.len(), 4);
    assert_eq!(records[0].title, "Caf\u{e9} opens on the main square");
    assert_eq!(records[0].description, vec!["Espa\u{f1}ol breakfast served daily"]);
    assert_eq!(records[1].title, "M\u{fc}nchen hosts a winter market");
    assert_eq!(records[3].title, "Cr\u{e8}me br\u{fb}l\u{e9}e contest crowns winner");
}

#[test]
fn rules_from_bytes_match_rules_from_text() {
    let html = "<ul>\
        <li><a href=\"/1\">First story about the weather</a><p>Summary one is here</p></li>\
        <li><a href=\"/2\">Second story about the markets</a><p>Summary two is here</p></li>\
        <li><a href=\"/3\">Third story about the elections</a><p>Summary three is here</p></li>\
        <li><a href=\"/4\">Fourth story about the harbour</a><p>Summary four is here</p></li>\
    </ul>";

    assert_eq!(article_rules_from_bytes(html.as_bytes()), article_rules(html));
}

#[test]
fn utf8_bom_is_stripped() {
    let mut html = vec![0xEF, 0xBB, 0xBF];
    html.extend_from_slice(
        b"<ul>\
        <li><a href=\"/1\">First story about the weather</a></li>\
        <li><a href=\"/2\">Second story about the markets</a></li>\
        <li><a href=\"/3\">Third story about the elections</a></li>\
        <li><a href=\"/4\">Fourth story about the harbour</a></li>\
        </ul>",
    );

    let records = articles_from_bytes(&html);
    assert_eq!(records.len(), 4);
    assert!(!records[0].title.starts_with('\u{feff}'));
}

#[test]
fn empty_bytes_yield_nothing() {
    assert!(article_rules_from_bytes(b"").is_empty());
    assert!(articles_from_bytes(b"").is_empty());
}

#[test]
fn byte_entry_points_accept_options() {
    let options = Options {
        with_class_names: true,
        ..Options::default()
    };
    let html = latin1_listing();

    let rules = article_rules_from_bytes_with_options(&html, &options);
    assert_eq!(rules[0].path.to_string(), "UL>LI");
    assert_eq!(articles_from_bytes_with_options(&html, &options).len(), 4);
}
