use std::sync::Arc;

use image::{DynamicImage, Rgb, RgbImage};
use scrub_config::{BlurKind, Config};
use scrub_core::{Error, Modality};
use scrub_engine::{ProviderRegistry, Scrubber};
use scrub_image::ImagePayload;
use serde_json::json;

fn text_image(width: u32, height: u32) -> DynamicImage {
    // Thin dark strokes on white, standing in for rendered text
    DynamicImage::ImageRgb8(RgbImage::from_fn(width, height, |x, y| {
        if y % 4 == 1 && x % 3 != 0 {
            Rgb([0, 0, 0])
        } else {
            Rgb([255, 255, 255])
        }
    }))
}

#[test]
fn test_text_scenarios() {
    let cases = [
        ("", ""),
        (
            "This string doesn't have anything to scrub.",
            "This string doesn't have anything to scrub.",
        ),
        (
            "test email is test@utoronto.ca ",
            "test email is ***@***.*** ",
        ),
        (
            "test phone number is 123-456-7890 and my",
            "test phone number is ***-***-**** and my",
        ),
        (
            "test credit card number is 1234-1234-1234-1234 sf",
            "test credit card number is ****-****-****-**** sf",
        ),
        (
            "test date of birth is 01/01/1990",
            "test date of birth is **/**/****",
        ),
    ];

    let scrubber = Scrubber::new();
    for (input, expected) in cases {
        assert_eq!(scrubber.scrub_text(input), expected, "input: {:?}", input);
        assert_eq!(scrub_security::scrub(input), expected, "input: {:?}", input);
    }
}

#[test]
fn test_combined_text() {
    let input = "mail test@utoronto.ca, call 123-456-7890, card 1234-1234-1234-1234, dob 01/01/1990";
    let scrubbed = scrub_security::scrub(input);

    assert_eq!(
        scrubbed,
        "mail ***@***.***, call ***-***-****, card ****-****-****-****, dob **/**/****"
    );
    assert_eq!(scrub_security::scrub(&scrubbed), scrubbed);
}

#[test]
fn test_scrub_image_round_trip() {
    let input = text_image(40, 20);
    let payload = ImagePayload::from_image(&input).unwrap();

    let output = scrub_image::scrub_image(payload.as_str()).unwrap();
    let decoded = ImagePayload::new(output).decode_image().unwrap();

    assert_eq!((decoded.width(), decoded.height()), (40, 20));
    assert_ne!(decoded.to_rgb8(), input.to_rgb8());
}

#[test]
fn test_scrub_image_with_box_config() {
    let mut config = Config::default();
    config.image.blur = BlurKind::Box;
    let scrubber = Scrubber::from_config(&config);

    let input = text_image(16, 16);
    let payload = ImagePayload::from_image(&input).unwrap();

    let output = scrubber.scrub_image(payload.as_str()).unwrap();
    let decoded = ImagePayload::new(output).decode_image().unwrap();
    assert_eq!((decoded.width(), decoded.height()), (16, 16));
}

#[test]
fn test_scrub_image_decode_error() {
    let err = scrub_image::scrub_image("definitely not an image").unwrap_err();
    assert!(matches!(err, Error::Decode(_)));
}

#[test]
fn test_registry_image_provider() {
    let registry = ProviderRegistry::new(Arc::new(Scrubber::new()));
    let providers = registry.for_modality(Modality::Image);
    let provider = providers.first().unwrap();

    let payload = ImagePayload::from_image(&text_image(8, 8)).unwrap();
    let output = provider.scrub_image(payload.as_str()).unwrap();

    let decoded = ImagePayload::new(output).decode_image().unwrap();
    assert_eq!((decoded.width(), decoded.height()), (8, 8));
}

#[test]
fn test_scrub_recorded_event() {
    let scrubber = Scrubber::new();
    let event = json!({
        "name": "type",
        "text": "j-o-e-@-x-.-c-o-m",
        "canonical_text": "j-o-e-@-x-.-c-o-m",
        "key_char": "m",
        "timestamp": 1.5,
        "children": [
            { "name": "press", "key_char": "j" }
        ],
        "window_event": {
            "title": "Booking for 01/02/2003",
            "state": { "url": "https://x.io/?phone=4165550199" }
        }
    });

    let scrubbed = scrubber.scrub_value(&event);

    assert_eq!(scrubbed["name"], "type");
    assert_eq!(scrubbed["text"], "*-*-*-@-*-*-*-.-*-*-*");
    assert_eq!(scrubbed["canonical_text"], "*-*-*-@-*-*-*-.-*-*-*");
    assert_eq!(scrubbed["key_char"], "*");
    assert_eq!(scrubbed["timestamp"], 1.5);
    assert_eq!(scrubbed["children"][0]["key_char"], "*");
    assert_eq!(scrubbed["window_event"]["title"], "Booking for **/**/****");
    assert_eq!(
        scrubbed["window_event"]["state"]["url"],
        "https://x.io/?phone=***-***-****"
    );
}
