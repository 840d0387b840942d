//! Human- and machine-readable span listings.
//!
//! `listing` prints one line per span for eyeballing a template; `to_json` is the stable shape
//! handed to external tooling (rollout builders, dataset inspectors).

use errloom_syntax::{Kargs, Kwargs, Span, SynapseWare};
use serde_json::{Map, Value, json};

/// Render one line per span: `index: kind details`.
pub fn listing(ware: &SynapseWare) -> String {
    let mut out = String::new();
    for (i, span) in ware.iter().enumerate() {
        out.push_str(&format!("{i}: {}\n", describe(span)));
    }
    out
}

/// One-line description of a span.
pub fn describe(span: &Span) -> String {
    let mut line = String::from(span.kind());
    match span {
        Span::Text(text) => line.push_str(&format!(" {:?}", text.text)),
        Span::Ego(ego) => {
            line.push_str(&format!(" {}", ego.ego));
            push_opt(&mut line, "uuid", ego.uuid.as_deref());
        }
        Span::Sample(sample) => {
            push_opt(&mut line, "uuid", sample.uuid.as_deref());
            push_kargs(&mut line, &sample.kargs);
            push_opt(&mut line, "goal", sample.goal.as_deref());
            push_kwargs(&mut line, &sample.kwargs);
        }
        Span::Class(class) => {
            line.push_str(&format!(" {}", class.class_name));
            push_kargs(&mut line, &class.kargs);
            push_kwargs(&mut line, &class.kwargs);
        }
        Span::Obj(obj) => {
            line.push_str(&format!(" [{}]", obj.var_ids.join(", ")));
            push_kargs(&mut line, &obj.kargs);
            push_kwargs(&mut line, &obj.kwargs);
        }
        Span::ContextReset(reset) => line.push_str(&format!(" train={}", reset.train)),
    }
    line
}

fn push_opt(line: &mut String, key: &str, value: Option<&str>) {
    if let Some(value) = value {
        line.push_str(&format!(" {key}={value}"));
    }
}

fn push_kargs(line: &mut String, kargs: &Kargs) {
    if !kargs.is_empty() {
        line.push_str(&format!(" kargs=[{}]", kargs.join(", ")));
    }
}

fn push_kwargs(line: &mut String, kwargs: &Kwargs) {
    if !kwargs.is_empty() {
        let pairs: Vec<String> = kwargs.iter().map(|(k, v)| format!("{k}={v}")).collect();
        line.push_str(&format!(" kwargs={{{}}}", pairs.join(", ")));
    }
}

/// Render the document as JSON: `{"spans": [{"kind": ..., ...}, ...]}`.
pub fn to_json(ware: &SynapseWare) -> Value {
    let spans: Vec<Value> = ware.iter().map(span_to_json).collect();
    json!({ "spans": spans })
}

fn span_to_json(span: &Span) -> Value {
    let kind = span.kind();
    match span {
        Span::Text(text) => json!({ "kind": kind, "text": text.text }),
        Span::Ego(ego) => json!({ "kind": kind, "ego": ego.ego.to_string(), "uuid": ego.uuid }),
        Span::Sample(sample) => json!({
            "kind": kind,
            "uuid": sample.uuid,
            "kargs": sample.kargs,
            "goal": sample.goal,
            "kwargs": kwargs_to_json(&sample.kwargs),
        }),
        Span::Class(class) => json!({
            "kind": kind,
            "class_name": class.class_name,
            "kargs": class.kargs,
            "kwargs": kwargs_to_json(&class.kwargs),
        }),
        Span::Obj(obj) => json!({
            "kind": kind,
            "var_ids": obj.var_ids,
            "kargs": obj.kargs,
            "kwargs": kwargs_to_json(&obj.kwargs),
        }),
        Span::ContextReset(reset) => json!({ "kind": kind, "train": reset.train }),
    }
}

fn kwargs_to_json(kwargs: &Kwargs) -> Value {
    let map: Map<String, Value> = kwargs.iter().map(|(k, v)| (k.clone(), Value::String(v.clone()))).collect();
    Value::Object(map)
}
