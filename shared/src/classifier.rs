//! Keyword-to-symbol lookup for meal names.
//!
//! Rules are checked top to bottom and the first rule with a keyword contained
//! in the lower-cased name wins.

/// Symbol used when no rule matches.
pub const DEFAULT_MEAL_SYMBOL: &str = "🍽";

/// A single classification rule: any of `keywords` selects `symbol`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SymbolRule {
    pub keywords: &'static [&'static str],
    pub symbol: &'static str,
}

impl SymbolRule {
    const fn new(keywords: &'static [&'static str], symbol: &'static str) -> Self {
        Self { keywords, symbol }
    }

    fn matches(&self, lower_name: &str) -> bool {
        self.keywords.iter().any(|keyword| lower_name.contains(keyword))
    }
}

/// Ordered rule table. Keep "salad" above "chicken" so mixed dishes read as salads.
pub const SYMBOL_RULES: &[SymbolRule] = &[
    SymbolRule::new(&["pizza"], "🍕"),
    SymbolRule::new(&["burger", "hamburger"], "🍔"),
    SymbolRule::new(&["salad"], "🥗"),
    SymbolRule::new(&["chicken"], "🍗"),
    SymbolRule::new(&["rice"], "🍚"),
    SymbolRule::new(&["pasta", "spaghetti"], "🍝"),
    SymbolRule::new(&["taco"], "🌮"),
    SymbolRule::new(&["sandwich"], "🥪"),
    SymbolRule::new(&["bread"], "🍞"),
    SymbolRule::new(&["egg"], "🥚"),
    SymbolRule::new(&["fruit", "apple"], "🍎"),
    SymbolRule::new(&["banana"], "🍌"),
    SymbolRule::new(&["cookie", "dessert"], "🍪"),
    SymbolRule::new(&["cake"], "🍰"),
    SymbolRule::new(&["ice cream"], "🍦"),
    SymbolRule::new(&["coffee"], "☕"),
    SymbolRule::new(&["beer"], "🍺"),
    SymbolRule::new(&["wine"], "🍷"),
    SymbolRule::new(&["milk"], "🥛"),
    SymbolRule::new(&["juice"], "🧃"),
];

/// Pick the decorative symbol for a meal name.
pub fn classify_meal(name: &str) -> &'static str {
    let lower_name = name.to_lowercase();
    SYMBOL_RULES
        .iter()
        .find(|rule| rule.matches(&lower_name))
        .map(|rule| rule.symbol)
        .unwrap_or(DEFAULT_MEAL_SYMBOL)
}
