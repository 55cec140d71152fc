// src/specs/rosters.rs
use scraper::Html;

use crate::core::html::{attr, selector, text_of};
use crate::error::ParseError;
use crate::records::PlayerRosterEntry;

/// Team cards → one entry per player row.
///
/// Card layout:
/// - first link: team name (text) + team page (`href`)
/// - first `<tbody>`: one `<tr>` per player; `<th>` = jersey number,
///   first link's `title` = country, last link's text = player
pub fn extract(doc: &Html, region: &str) -> Result<Vec<PlayerRosterEntry>, ParseError> {
    let card_sel = selector("div.teamcard")?;
    let link_sel = selector("a")?;
    let body_sel = selector("tbody")?;
    let row_sel = selector("tr")?;
    let head_sel = selector("th")?;

    let mut out = Vec::new();

    for card in doc.select(&card_sel) {
        let team_link = card.select(&link_sel).next().ok_or(ParseError::MissingNode {
            unit: s!("team card"),
            what: "team link",
        })?;
        let team = text_of(&team_link);
        let team_url = attr(&team_link, "href").ok_or_else(|| ParseError::MissingNode {
            unit: team.clone(),
            what: "team link href",
        })?;

        let body = card.select(&body_sel).next().ok_or_else(|| ParseError::MissingNode {
            unit: team.clone(),
            what: "player table body",
        })?;

        for (i, row) in body.select(&row_sel).enumerate() {
            let malformed = |reason| ParseError::MalformedRoster { team: team.clone(), row: i + 1, reason };

            let jersey_number = row
                .select(&head_sel)
                .next()
                .map(|th| text_of(&th))
                .ok_or_else(|| malformed("no header cell"))?;

            let links: Vec<_> = row.select(&link_sel).collect();
            let (Some(first), Some(last)) = (links.first(), links.last()) else {
                return Err(malformed("no links"));
            };
            let country = attr(first, "title").ok_or_else(|| malformed("country link has no title"))?;

            out.push(PlayerRosterEntry {
                player: text_of(last),
                country: s!(country),
                jersey_number,
                team: team.clone(),
                team_url: s!(team_url),
                region: s!(region),
            });
        }
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    const CARD: &str = r#"
        <div class="teamcard">
          <center><b><a href="/rocketleague/Alpha" title="Alpha">Alpha</a></b></center>
          <table><tbody>
            <tr><th>1</th><td><a href="/c/US" title="United States"><img></a>&nbsp;<a href="/p/Ace" title="Ace">Ace</a></td></tr>
            <tr><th>2</th><td><a href="/c/CA" title="Canada"><img></a>&nbsp;<a href="/p/Bolt" title="Bolt">Bolt</a></td></tr>
          </tbody></table>
        </div>"#;

    #[test]
    fn one_entry_per_row() {
        let doc = Html::parse_document(CARD);
        let rows = extract(&doc, "North America").unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(
            rows[0],
            PlayerRosterEntry {
                player: s!("Ace"),
                country: s!("United States"),
                jersey_number: s!("1"),
                team: s!("Alpha"),
                team_url: s!("/rocketleague/Alpha"),
                region: s!("North America"),
            }
        );
        assert_eq!((rows[1].player.as_str(), rows[1].country.as_str()), ("Bolt", "Canada"));
    }

    #[test]
    fn missing_header_cell_names_team() {
        let doc = Html::parse_document(
            r#"<div class="teamcard"><a href="/t/Bravo">Bravo</a>
               <table><tbody><tr><td><a title="France">x</a><a>Zed</a></td></tr></tbody></table></div>"#,
        );
        let err = extract(&doc, "Europe").unwrap_err();
        assert_eq!(
            err,
            ParseError::MalformedRoster { team: s!("Bravo"), row: 1, reason: "no header cell" }
        );
        assert!(err.to_string().contains("Bravo"));
    }

    #[test]
    fn no_cards_no_rows() {
        let doc = Html::parse_document("<html><body><p>nothing</p></body></html>");
        assert!(extract(&doc, "Europe").unwrap().is_empty());
    }
}
