//! Offline batch tool that pre-renders the site's marketing images.
//!
//! One request per hard-coded prompt against the image-generation endpoint;
//! PNGs land in `public/ai/` and a manifest with one record per image in
//! `scripts/image-manifest.json`. A missing credential or an empty response
//! aborts the whole run: partial output is worse than no output here, since
//! the catalog references every file by name.

use std::path::Path;

use anyhow::{bail, Context, Result};
use base64::Engine;
use dotenvy::dotenv;
use serde::{Deserialize, Serialize};
use tracing::{error, info};

const ENDPOINT: &str = "https://api.openai.com/v1/images/generations";
const MODEL: &str = "gpt-image-1";
const SIZE: &str = "1536x1024";
const QUALITY: &str = "hd";
const OUTPUT_DIR: &str = "public/ai";
const MANIFEST_PATH: &str = "scripts/image-manifest.json";

struct ImageSpec {
    filename: &'static str,
    prompt: &'static str,
}

static IMAGES: [ImageSpec; 6] = [
    ImageSpec {
        filename: "hero.png",
        prompt: "High-end editorial architectural render of a contemporary residence at dawn, soft natural light, realistic materials, minimal landscaping, cinematic composition, no text or logos.",
    },
    ImageSpec {
        filename: "victorian.png",
        prompt: "Victorian brick house with precast stone trim, restored facade, calm residential street, soft morning light, elegant and minimal composition, no people, no watermarks.",
    },
    ImageSpec {
        filename: "bauhaus.png",
        prompt: "Bauhaus-inspired house with one monolithic natural stone pillar, geometric white volumes, expansive glass, gentle sunlight, premium architectural visualization, no text.",
    },
    ImageSpec {
        filename: "cyclopean-chalet.png",
        prompt: "Large chalet made of cyclopean cobblestone, long eaves, recessed lighting, alpine setting, soft dusk light, clean editorial render, no logos.",
    },
    ImageSpec {
        filename: "wave-wall.png",
        prompt: "Commercial building facade with undulating prefabricated brick modules, rhythmic shadows, golden hour light, sophisticated architectural render, no signage, no watermarks.",
    },
    ImageSpec {
        filename: "french-townhouses.png",
        prompt: "Row of French-inspired townhouses with precast panels and Art Nouveau Parisian details, quiet street, warm golden light, high-end architectural render, no text.",
    },
];

#[derive(Serialize)]
struct GenerationRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    size: &'a str,
    quality: &'a str,
    response_format: &'a str,
}

#[derive(Deserialize)]
struct GenerationResponse {
    #[serde(default)]
    data: Vec<GeneratedImage>,
}

#[derive(Deserialize)]
struct GeneratedImage {
    b64_json: Option<String>,
}

#[derive(Serialize)]
struct ManifestEntry {
    filename: String,
    prompt: &'static str,
    size: &'static str,
    quality: &'static str,
    timestamp: String,
}

/// The base64 payload of the first generated image, if the endpoint
/// returned one.
fn first_payload(response: GenerationResponse) -> Option<String> {
    response.data.into_iter().next().and_then(|img| img.b64_json)
}

fn render_manifest(entries: &[ManifestEntry]) -> Result<String> {
    serde_json::to_string_pretty(entries).context("serializing manifest")
}

async fn generate(client: &reqwest::Client, api_key: &str, spec: &ImageSpec) -> Result<Vec<u8>> {
    let request = GenerationRequest {
        model: MODEL,
        prompt: spec.prompt,
        size: SIZE,
        quality: QUALITY,
        response_format: "b64_json",
    };

    let response = client
        .post(ENDPOINT)
        .header(reqwest::header::AUTHORIZATION, format!("Bearer {}", api_key))
        .json(&request)
        .send()
        .await
        .with_context(|| format!("requesting {}", spec.filename))?
        .error_for_status()
        .with_context(|| format!("generation request rejected for {}", spec.filename))?
        .json::<GenerationResponse>()
        .await
        .with_context(|| format!("decoding response for {}", spec.filename))?;

    let Some(payload) = first_payload(response) else {
        bail!("Image generation failed for {}", spec.filename);
    };

    base64::engine::general_purpose::STANDARD
        .decode(payload)
        .with_context(|| format!("decoding image data for {}", spec.filename))
}

async fn run() -> Result<()> {
    let api_key = std::env::var("OPENAI_API_KEY")
        .map_err(|_| anyhow::anyhow!("OPENAI_API_KEY is missing. Add it to your environment or .env file."))?;

    tokio::fs::create_dir_all(OUTPUT_DIR)
        .await
        .with_context(|| format!("creating {}", OUTPUT_DIR))?;

    let client = reqwest::Client::new();
    let mut manifest = Vec::with_capacity(IMAGES.len());

    for spec in &IMAGES {
        let bytes = generate(&client, &api_key, spec).await?;

        let filepath = Path::new(OUTPUT_DIR).join(spec.filename);
        tokio::fs::write(&filepath, &bytes)
            .await
            .with_context(|| format!("writing {}", filepath.display()))?;
        info!("saved {}", spec.filename);

        manifest.push(ManifestEntry {
            filename: format!("{}/{}", OUTPUT_DIR, spec.filename),
            prompt: spec.prompt,
            size: SIZE,
            quality: QUALITY,
            timestamp: chrono::Utc::now().to_rfc3339(),
        });
    }

    if let Some(parent) = Path::new(MANIFEST_PATH).parent() {
        tokio::fs::create_dir_all(parent)
            .await
            .with_context(|| format!("creating {}", parent.display()))?;
    }
    tokio::fs::write(MANIFEST_PATH, render_manifest(&manifest)?)
        .await
        .with_context(|| format!("writing {}", MANIFEST_PATH))?;
    info!("manifest updated at {}", MANIFEST_PATH);

    Ok(())
}

#[tokio::main]
async fn main() {
    dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    if let Err(err) = run().await {
        error!("Image generation failed: {:#}", err);
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_payload_returns_none_for_empty_data() {
        let response: GenerationResponse = serde_json::from_str(r#"{"data": []}"#).unwrap();
        assert!(first_payload(response).is_none());
    }

    #[test]
    fn first_payload_returns_none_when_b64_is_absent() {
        let response: GenerationResponse =
            serde_json::from_str(r#"{"data": [{"url": "https://example.com/x.png"}]}"#).unwrap();
        assert!(first_payload(response).is_none());
    }

    #[test]
    fn first_payload_extracts_the_first_image() {
        let response: GenerationResponse =
            serde_json::from_str(r#"{"data": [{"b64_json": "aGVsbG8="}, {"b64_json": "eA=="}]}"#)
                .unwrap();
        assert_eq!(first_payload(response).as_deref(), Some("aGVsbG8="));
    }

    #[test]
    fn manifest_records_carry_all_fields() {
        let entries = vec![ManifestEntry {
            filename: format!("{}/hero.png", OUTPUT_DIR),
            prompt: IMAGES[0].prompt,
            size: SIZE,
            quality: QUALITY,
            timestamp: "2025-01-01T00:00:00+00:00".to_owned(),
        }];
        let rendered = render_manifest(&entries).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&rendered).unwrap();
        let record = &parsed[0];
        assert_eq!(record["filename"], "public/ai/hero.png");
        assert_eq!(record["size"], "1536x1024");
        assert_eq!(record["quality"], "hd");
        assert!(record["prompt"].as_str().unwrap().contains("residence"));
        assert!(record["timestamp"].is_string());
    }

    #[test]
    fn every_catalog_image_has_a_prompt() {
        assert_eq!(IMAGES.len(), 6);
        for spec in &IMAGES {
            assert!(spec.filename.ends_with(".png"));
            assert!(!spec.prompt.is_empty());
        }
    }
}
