use once_cell::sync::Lazy;
use regex::Regex;

static NON_ALNUM: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^a-z0-9]+").expect("Failed to compile slug regex"));

static SLUG_FORMAT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-z0-9]+(-[a-z0-9]+)*$").expect("Failed to compile slug format regex")
});

/// Check that a slug is lowercase alphanumeric groups separated by single hyphens
pub fn is_valid_slug(slug: &str) -> bool {
    !slug.is_empty() && slug.len() <= 100 && SLUG_FORMAT.is_match(slug)
}

/// Generate a URL-friendly slug from a title. Portuguese diacritics are
/// folded to their ASCII base letter before everything else collapses to
/// hyphens.
pub fn slugify(title: &str) -> String {
    let folded: String = title
        .trim()
        .to_lowercase()
        .chars()
        .map(fold_diacritic)
        .collect();

    let mut slug = NON_ALNUM.replace_all(&folded, "-").to_string();
    slug = slug.trim_matches('-').to_string();

    if slug.is_empty() {
        slug = "artigo".to_string();
    }

    // Keep slugs at a reasonable URL length
    if slug.len() > 100 {
        slug = slug
            .chars()
            .take(100)
            .collect::<String>()
            .trim_end_matches('-')
            .to_string();
    }

    slug
}

fn fold_diacritic(c: char) -> char {
    match c {
        'á' | 'à' | 'â' | 'ã' | 'ä' => 'a',
        'é' | 'è' | 'ê' | 'ë' => 'e',
        'í' | 'ì' | 'î' | 'ï' => 'i',
        'ó' | 'ò' | 'ô' | 'õ' | 'ö' => 'o',
        'ú' | 'ù' | 'û' | 'ü' => 'u',
        'ç' => 'c',
        'ñ' => 'n',
        _ => c,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugify_basic() {
        assert_eq!(slugify("Direito do Consumidor"), "direito-do-consumidor");
        assert_eq!(slugify("Horas Extras"), "horas-extras");
        assert_eq!(slugify("Contato"), "contato");
    }

    #[test]
    fn test_slugify_folds_diacritics() {
        assert_eq!(slugify("Pensão Alimentícia"), "pensao-alimenticia");
        assert_eq!(slugify("Divórcio consensual"), "divorcio-consensual");
        assert_eq!(slugify("Aluguel: 5 cláusulas!"), "aluguel-5-clausulas");
        assert_eq!(slugify("O que é FGTS?"), "o-que-e-fgts");
    }

    #[test]
    fn test_slugify_whitespace() {
        assert_eq!(slugify("  Direito  Familiar  "), "direito-familiar");
        assert_eq!(slugify("\tHoras\textras\t"), "horas-extras");
    }

    #[test]
    fn test_slugify_edge_cases() {
        assert_eq!(slugify(""), "artigo");
        assert_eq!(slugify("   "), "artigo");
        assert_eq!(slugify("!!!"), "artigo");
        assert_eq!(slugify("---"), "artigo");
    }

    #[test]
    fn test_slugify_numbers() {
        assert_eq!(slugify("13º salário"), "13-salario");
        assert_eq!(slugify("Top 10 dicas"), "top-10-dicas");
    }

    #[test]
    fn test_slugify_long_title() {
        let long_title = "Um título extremamente longo que ultrapassa com folga o limite de cem caracteres estabelecido para manter as URLs do site em um tamanho razoável";
        let slug = slugify(long_title);
        assert!(slug.len() <= 100);
        assert!(!slug.ends_with('-'));
    }

    #[test]
    fn test_is_valid_slug_accepts_generated() {
        for title in ["Direito Trabalhista", "Aluguel: 5 cláusulas!", "2024"] {
            assert!(is_valid_slug(&slugify(title)), "title: {}", title);
        }
    }

    #[test]
    fn test_is_valid_slug_rejects_bad_input() {
        assert!(!is_valid_slug(""));
        assert!(!is_valid_slug("Direito"));
        assert!(!is_valid_slug("direito--civil"));
        assert!(!is_valid_slug("-direito"));
        assert!(!is_valid_slug("direito-"));
        assert!(!is_valid_slug("direito civil"));
        assert!(!is_valid_slug("direito_civil"));
    }
}
