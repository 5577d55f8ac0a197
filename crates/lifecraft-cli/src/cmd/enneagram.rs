use crate::output::{print_json, print_table};
use anyhow::Context;
use clap::Subcommand;
use lifecraft_core::enneagram::{self, Instinct, Locale, Response};
use serde::Deserialize;
use std::path::PathBuf;

#[derive(Subcommand)]
pub enum EnneagramSubcommand {
    /// Score a JSON answer file: {"responses": [{"itemId", "value"}], "instincts": [...]}
    Score {
        file: PathBuf,
        /// Language of the result text (en, kr)
        #[arg(long, default_value = "en")]
        locale: Locale,
    },

    /// List the screener and instinct items
    Items {
        /// Language of the item wording (en, kr)
        #[arg(long, default_value = "en")]
        locale: Locale,
    },

    /// Show one type's profile, optionally with a wing and subtype
    Profile {
        #[arg(value_parser = clap::value_parser!(u8).range(1..=9))]
        enneagram_type: u8,
        /// Adjacent type to describe as the wing
        #[arg(long, value_parser = clap::value_parser!(u8).range(1..=9))]
        wing: Option<u8>,
        /// Instinct to describe as the subtype (sp, so, sx)
        #[arg(long)]
        instinct: Option<Instinct>,
        #[arg(long, default_value = "en")]
        locale: Locale,
    },
}

#[derive(Deserialize)]
struct AnswerFile {
    #[serde(default)]
    responses: Vec<Response>,
    #[serde(default)]
    instincts: Option<Vec<Response>>,
}

pub fn run(subcmd: EnneagramSubcommand, json: bool) -> anyhow::Result<()> {
    match subcmd {
        EnneagramSubcommand::Score { file, locale } => score(&file, locale, json),
        EnneagramSubcommand::Items { locale } => items(locale, json),
        EnneagramSubcommand::Profile {
            enneagram_type,
            wing,
            instinct,
            locale,
        } => profile(enneagram_type, wing, instinct, locale, json),
    }
}

fn score(file: &std::path::Path, locale: Locale, json: bool) -> anyhow::Result<()> {
    let data = std::fs::read_to_string(file)
        .with_context(|| format!("failed to read {}", file.display()))?;
    let answers: AnswerFile = serde_json::from_str(&data)
        .with_context(|| format!("failed to parse {}", file.display()))?;
    let result = enneagram::assess(&answers.responses, answers.instincts.as_deref(), locale)?;

    if json {
        return print_json(&result);
    }

    println!(
        "Type {} {} (confidence: {:?})",
        result.primary_type, result.type_name, result.confidence
    );
    let rows = result
        .scores
        .raw
        .iter()
        .map(|(t, raw)| {
            let p = result.scores.probabilities.get(t).copied().unwrap_or(0.0);
            vec![t.to_string(), raw.to_string(), format!("{:.1}%", p * 100.0)]
        })
        .collect();
    print_table(&["TYPE", "RAW", "PROB"], rows);
    if let Some(inst) = result.instincts {
        println!(
            "\nInstincts: sp={} so={} sx={} → {}",
            inst.sp,
            inst.so,
            inst.sx,
            inst.dominant.display_name(locale)
        );
    }
    if let Some(subtype) = result.subtype {
        println!("{subtype}");
    }
    Ok(())
}

fn items(locale: Locale, json: bool) -> anyhow::Result<()> {
    if json {
        return print_json(&serde_json::json!({
            "locale": locale,
            "screener": enneagram::screener_items(locale),
            "instincts": enneagram::instinct_items(locale),
        }));
    }
    let mut rows: Vec<Vec<String>> = enneagram::screener_items(locale)
        .iter()
        .map(|i| vec![i.id.to_string(), i.enneagram_type.to_string(), i.text.to_string()])
        .collect();
    rows.extend(
        enneagram::instinct_items(locale)
            .iter()
            .map(|i| vec![i.id.to_string(), i.instinct.as_str().to_string(), i.text.to_string()]),
    );
    print_table(&["ID", "KEY", "TEXT"], rows);
    Ok(())
}

fn profile(
    enneagram_type: u8,
    wing: Option<u8>,
    instinct: Option<Instinct>,
    locale: Locale,
    json: bool,
) -> anyhow::Result<()> {
    let profile = enneagram::profile(enneagram_type)
        .with_context(|| format!("no profile for type {enneagram_type}"))?;
    let wing_text = wing
        .map(|w| enneagram::wing_description(enneagram_type, w, locale))
        .transpose()?;
    let subtype_text = instinct.map(|i| profile.subtype(i).get(locale));
    let view = profile.localized(locale);

    if json {
        return print_json(&serde_json::json!({
            "profile": view,
            "wing": wing_text,
            "subtype": subtype_text,
        }));
    }

    println!("Type {} {} ({})", view.enneagram_type, view.name, view.nickname);
    println!("{}", view.description);
    print_table(
        &["FIELD", "VALUE"],
        vec![
            vec!["motivation".into(), view.core_motivation.into()],
            vec!["fear".into(), view.core_fear.into()],
            vec!["desire".into(), view.core_desire.into()],
            vec!["growth".into(), view.growth_direction.to_string()],
            vec!["stress".into(), view.stress_direction.to_string()],
            vec!["wings".into(), format!("{} / {}", view.wings[0], view.wings[1])],
        ],
    );
    if let Some(text) = wing_text {
        println!("\n{text}");
    }
    if let Some(text) = subtype_text {
        println!("\n{text}");
    }
    Ok(())
}
