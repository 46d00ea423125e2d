use pretty_assertions::assert_eq;

use super::*;
use crate::{Filter, FilterContext, GbfHtml, PlainHtml, TokenTable};

#[test]
fn exercise_full_api() {
    // Use every member of the exposed API; not looking for specific
    // outputs, just whether the API changes shape.

    let options = Options::default();
    let _: String = gbf_to_html("x", &options);

    let renderer = Renderer::new(&options);
    let _: String = renderer.render_entry("x", Some(&KJV), Some(&"Gen 1:1" as &dyn KeyInfo));
    let _: String = renderer.render_all(
        vec![
            (&"Gen 1:1" as &dyn KeyInfo, "a"),
            (&"Gen 1:2" as &dyn KeyInfo, "b"),
        ],
        Some(&KJV),
    );

    let mut table = TokenTable::new();
    table.register("XX", "<b>");
    assert_eq!(table.lookup("XX"), Some("<b>"));
    table.remove("XX");
    assert_eq!(table.lookup("XX"), None);
    let _ = TokenTable::case_insensitive();

    let gbf_filter = GbfHtml::new();
    let mut ctx = FilterContext::new(Some(&KJV), Some(&"Gen 1:1" as &dyn KeyInfo));
    let _: String = gbf_filter.process_text("x", &mut ctx);
    assert!(gbf_filter.pass_unknown_tokens());
    assert!(gbf_filter.table().lookup("FI").is_some());

    let plain_filter = PlainHtml::new();
    let mut ctx = FilterContext::new(None, None);
    let _: String = plain_filter.process_text("x", &mut ctx);

    let _ = Markup::default();
    let _ = Capability::Lemmas;
    assert_eq!("Gen 1:1".short_text(), "Gen 1:1");
    assert_eq!(String::from("Gen 1:1").short_text(), "Gen 1:1");

    #[cfg(feature = "bon")]
    {
        let built = Options::builder()
            .annotate(false)
            .markup(Markup::Plain)
            .build();
        assert!(!built.annotate);
        assert_eq!(built.markup, Markup::Plain);

        let defaults = Options::builder().build();
        assert!(defaults.annotate);
        assert_eq!(defaults.markup, Markup::Gbf);
    }
}

#[test]
fn filters_are_shared_across_threads() {
    // The substitution tables are read-only after construction; renders
    // for different keys may run concurrently.
    let handles: Vec<_> = (0..4)
        .map(|i| {
            std::thread::spawn(move || {
                let options = Options::default();
                let renderer = Renderer::new(&options);
                let key = format!("Gen 1:{}", i);
                renderer.render_entry(
                    "word<WH1234><RF>note<Rf>",
                    Some(&KJV),
                    Some(&key as &dyn KeyInfo),
                )
            })
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        let html = handle.join().unwrap();
        assert!(html.contains(&format!("note=\"TestKJV/Gen 1:{}/0\"", i)));
        assert!(html.contains("<span lemma=\"H1234\">word</span>"));
    }
}
