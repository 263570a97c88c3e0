use pseo_core::quality::{check_page_quality, quality_grade, should_exclude_from_sitemap, should_return_404};
use pseo_core::{Config, PseoEngine, PseoPage, QualityRule};

fn engine() -> PseoEngine {
    PseoEngine::builtin(Config::default()).unwrap()
}

/// Variants of a page with one defect each.
fn degraded(page: &PseoPage) -> Vec<PseoPage> {
    let mut no_links = page.clone();
    no_links.related_links.clear();

    let mut short_title = page.clone();
    short_title.title = "Short".to_string();

    let mut empty_section = page.clone();
    empty_section.sections[0].content.clear();

    let mut forbidden = page.clone();
    forbidden.sections[0].content.push_str(" Full details coming soon.");

    let mut truncated = page.clone();
    truncated.sections.truncate(1);

    vec![no_links, short_title, empty_section, forbidden, truncated]
}

#[test]
fn test_forbidden_phrase_lowers_score() {
    let engine = engine();
    let rules = &engine.config().quality;

    for page in engine.qualified_pages() {
        let before = check_page_quality(&page, rules).score;

        let mut tainted = page.clone();
        tainted.sections[0].content.push_str(" Lorem ipsum dolor sit amet.");
        let after = check_page_quality(&tainted, rules);

        assert!(after.score < before || after.score == 0, "{}", page.slug);
        assert!(after
            .failures
            .iter()
            .any(|f| f.rule == QualityRule::ForbiddenPhrases));
        assert!(should_return_404(Some(&tainted), rules));
    }
}

#[test]
fn test_not_found_implies_excluded() {
    let engine = engine();
    let rules = &engine.config().quality;

    for page in engine.all_pages() {
        for candidate in std::iter::once(page.clone()).chain(degraded(&page)) {
            if should_return_404(Some(&candidate), rules) {
                assert!(
                    should_exclude_from_sitemap(&candidate, rules),
                    "{} is a 404 but stays in the sitemap",
                    candidate.slug
                );
            }
        }
    }
}

#[test]
fn test_excluded_is_not_always_not_found() {
    let engine = engine();
    let rules = &engine.config().quality;
    let page = engine.page_by_slug("what-is-supervised-learning").unwrap();

    let mut thin = page.clone();
    thin.sections[0].content = "Brief overview.".to_string();

    let result = check_page_quality(&thin, rules);
    assert!(result.failures.iter().any(|f| f.rule == QualityRule::SectionLength));
    assert!(should_exclude_from_sitemap(&thin, rules));
    assert!(!should_return_404(Some(&thin), rules));
}

#[test]
fn test_qualified_pages_pass_cleanly() {
    let engine = engine();
    for page in engine.qualified_pages() {
        let result = engine.check_quality(&page);
        assert!(result.passed);
        assert!(!result.has_errors());
        assert!(result.score >= 60);
        assert_ne!(quality_grade(result.score), 'F');
        assert!(!engine.should_return_404(Some(&page)));
    }
}

#[test]
fn test_custom_forbidden_phrase() {
    let mut config = Config::default();
    config.quality.forbidden_phrases = vec!["supervised".to_string()];
    let engine = PseoEngine::builtin(config).unwrap();

    let page = engine.page_by_slug("what-is-supervised-learning").unwrap();
    assert!(page.exclude_from_sitemap);
    assert!(engine.should_return_404(Some(&page)));
}
