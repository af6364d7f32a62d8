use pretty_assertions::assert_eq;
use regcalc::analyzer::Outcomes;
use regcalc::{CalcConfig, Error, Evaluation, EvaluationMode, Evaluator, SymbolTable};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[ctor::ctor]
fn init_tests() {
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(EnvFilter::from_default_env())
        .finish();
    tracing::subscriber::set_global_default(subscriber).expect("Failed to set tracing subscriber");
}

fn evaluate(source: &str) -> Result<Evaluation, Error> {
    Evaluator::default().evaluate(source)
}

#[test]
fn it_evaluates_arithmetic() {
    assert_eq!(evaluate("2 + 3").unwrap().value, 5);
    assert_eq!(evaluate("2 * 3 + 4").unwrap().value, 10);
    assert_eq!(evaluate("(2 + 3) * 4").unwrap().value, 20);
    assert_eq!(evaluate("ONE + TWO").unwrap().value, 3);
}

#[test]
fn it_reports_no_match() {
    assert_eq!(evaluate(""), Err(Error::NoMatch));
    assert_eq!(evaluate("ONEX"), Err(Error::NoMatch));
    assert_eq!(evaluate("* 2"), Err(Error::NoMatch));
}

#[test]
fn it_keeps_the_unparsed_remainder() {
    let evaluation = evaluate("(1 + 2) * 3 * ((4 + 50 + ONEX) * (TWO + ONE))").unwrap();
    assert_eq!(
        evaluation,
        Evaluation {
            value: 9,
            remainder: "* ((4 + 50 + ONEX) * (TWO + ONE))".to_string(),
        }
    );
    assert!(!evaluation.is_complete());
}

#[test]
fn it_substitutes_symbol_tables() {
    let table = SymbolTable::builder()
        .with("ONE", 100)
        .with("TWO", 200)
        .build()
        .unwrap();
    let evaluator = Evaluator::new(table);
    assert_eq!(evaluator.parse("ONE + TWO"), Outcomes::single(300, ""));
}

#[test]
fn it_evaluates_in_complete_mode_from_config() {
    let config = CalcConfig {
        mode: EvaluationMode::Complete,
        ..CalcConfig::default()
    };
    let evaluator = Evaluator::from_config(&config).unwrap();
    assert_eq!(evaluator.evaluate("TWO * TWO").unwrap().value, 4);
    assert_eq!(
        evaluator.evaluate("TWO TWO"),
        Err(Error::TrailingInput {
            value: 2,
            remainder: "TWO".to_string()
        })
    );
}

#[test]
fn it_handles_nested_parentheses() {
    let depth = 8;
    let source = format!("{}7{}", "(".repeat(depth), ")".repeat(depth));
    assert_eq!(evaluate(&source).unwrap().value, 7);
}
