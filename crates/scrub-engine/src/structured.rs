//! Scrubbing of recorded JSON documents (action events, window state)
//!
//! Only string values under configured keys are touched. Once a `text` or
//! `canonical_text` field is found to contain PII, the string fields that
//! follow it in the same object are masked whole.

use serde_json::{Map, Value};

use crate::Scrubber;

const TEXT_KEYS: [&str; 2] = ["text", "canonical_text"];
const STATE_KEY: &str = "state";

fn is_text_key(key: &str) -> bool {
    TEXT_KEYS.contains(&key)
}

impl Scrubber {
    /// Scrub any JSON value
    pub fn scrub_value(&self, value: &Value) -> Value {
        match value {
            Value::Object(map) => Value::Object(self.scrub_dict(map, false)),
            Value::Array(items) => Value::Array(self.scrub_list_dicts(items)),
            Value::String(text) => Value::String(self.scrub_text(text)),
            other => other.clone(),
        }
    }

    /// Scrub an object; `scrub_all` ignores the key list for its own string fields
    pub fn scrub_dict(&self, map: &Map<String, Value>, scrub_all: bool) -> Map<String, Value> {
        self.walk_dict(map, scrub_all, false)
    }

    /// Scrub every object in `items`; other values pass through
    pub fn scrub_list_dicts(&self, items: &[Value]) -> Vec<Value> {
        items
            .iter()
            .map(|item| match item {
                Value::Object(map) => Value::Object(self.scrub_dict(map, false)),
                other => other.clone(),
            })
            .collect()
    }

    fn is_listed(&self, key: &str) -> bool {
        self.keys().iter().any(|k| k == key)
    }

    fn walk_dict(
        &self,
        map: &Map<String, Value>,
        scrub_all: bool,
        mut force_children: bool,
    ) -> Map<String, Value> {
        let mut scrubbed = Map::with_capacity(map.len());

        for (key, value) in map {
            let listed = self.is_listed(key);

            let new_value = match value {
                Value::String(text) if listed || scrub_all => {
                    let cleaned = self.scrub_text_item(text, key, force_children);
                    if is_text_key(key) && cleaned != *text {
                        force_children = true;
                    }
                    Value::String(cleaned)
                }
                Value::Array(items) => {
                    let items = items
                        .iter()
                        .map(|item| match item {
                            Value::String(text) if listed => {
                                Value::String(self.scrub_text_item(text, key, false))
                            }
                            Value::Object(child) => {
                                Value::Object(self.walk_dict(child, false, force_children))
                            }
                            other => other.clone(),
                        })
                        .collect();
                    force_children = false;
                    Value::Array(items)
                }
                Value::Object(child) => {
                    Value::Object(self.walk_dict(child, key == STATE_KEY, false))
                }
                other => other.clone(),
            };

            scrubbed.insert(key.clone(), new_value);
        }

        scrubbed
    }

    fn scrub_text_item(&self, text: &str, key: &str, force_children: bool) -> String {
        if is_text_key(key) {
            self.scrub_separated(text)
        } else if force_children {
            self.scrub_text_all(text)
        } else {
            self.scrub_text(text)
        }
    }
}
