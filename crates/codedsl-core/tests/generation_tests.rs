//! End-to-end generation through the public API

#![allow(non_snake_case)]

use codedsl_core::prelude::*;

fn bank_context() -> Context {
    let deposited = Message::new("Deposited").with_member(Member::new("decimal", "Amount"));

    Context::new()
        .with_contract(deposited.clone())
        .with_contract(
            Message::new("Withdrawn")
                .with_member(Member::new("decimal", "amount"))
                .with_member(Member::new("string", "reason"))
                .with_modifier(Modifier::new("!", "IAccountEvent")),
        )
        .with_entity(
            Entity::named("Account")
                .with_message(deposited.with_modifier(Modifier::new("?", "IAccountCommand"))),
        )
}

fn count(haystack: &str, needle: &str) -> usize {
    haystack.matches(needle).count()
}

#[test]
fn generate___deposited_account_example___has_expected_shape() {
    let context = Context::new()
        .with_contract(Message::new("Deposited").with_member(Member::new("decimal", "Amount")))
        .with_entity(
            Entity::named("Account").with_message(
                Message::new("Deposited")
                    .with_member(Member::new("decimal", "Amount"))
                    .with_modifier(Modifier::new("?", "IAccountCommand")),
            ),
        );

    let source = TemplatedGenerator::default().render_to_string(&context).unwrap();

    assert_eq!(count(&source, "public sealed class Deposited\n"), 1);
    assert_eq!(count(&source, "[ProtoMember("), 1);
    assert_eq!(count(&source, "private Deposited () {}"), 1);
    assert_eq!(count(&source, "public Deposited (decimal amount)"), 1);
    assert_eq!(count(&source, "Amount = amount;"), 1);
    assert_eq!(count(&source, "public interface IAccountAggregate\n"), 1);
    assert_eq!(count(&source, "void When(Deposited c);"), 1);
    assert!(!source.contains("AggregateState"));
}

#[test]
fn generate___wrappers_removed___body_matches_once_rebased() {
    let context = bank_context();
    let wrapped = GeneratorConfig::default().with_namespace("Bank.Contracts");
    let bare = GeneratorConfig::default().without_region();

    let wrapped_source = TemplatedGenerator::new(wrapped).render_to_string(&context).unwrap();
    let bare_source = TemplatedGenerator::new(bare).render_to_string(&context).unwrap();

    let lines: Vec<&str> = wrapped_source.lines().collect();
    assert_eq!(lines[0], "namespace Bank.Contracts");
    assert_eq!(lines[1], "{");
    assert_eq!(lines[2], "    #region Generated by Code DSL");
    assert_eq!(lines[lines.len() - 2], "    #endregion");
    assert_eq!(lines[lines.len() - 1], "}");

    let rebased: Vec<&str> = lines[3..lines.len() - 2]
        .iter()
        .copied()
        .map(|line| line.strip_prefix("    ").unwrap_or(line))
        .collect();
    let bare_lines: Vec<&str> = bare_source.lines().collect();
    assert_eq!(rebased, bare_lines);
}

#[test]
fn generate___into_file_backed_writer___matches_string_rendering() {
    let context = bank_context();
    let generator = TemplatedGenerator::default();
    let mut sink = IndentedTextWriter::new(std::io::BufWriter::new(Vec::new()));

    generator.generate(&context, &mut sink).unwrap();
    sink.flush().unwrap();
    let buffered = sink.into_inner().into_inner().unwrap();

    assert_eq!(
        String::from_utf8(buffered).unwrap(),
        generator.render_to_string(&context).unwrap()
    );
}

#[test]
fn generate___model_from_json___renders() {
    let json = r#"{
        "contracts": [
            { "name": "Closed", "modifiers": [{ "identifier": "!", "interface": "IAccountEvent" }] }
        ],
        "entities": [
            { "name": "Account", "messages": [
                { "name": "Closed", "modifiers": [{ "identifier": "!", "interface": "IAccountEvent" }] }
            ] },
            { "name": null, "messages": [] }
        ]
    }"#;
    let context = Context::from_json(json.as_bytes()).unwrap();
    let config = GeneratorConfig::from_json(br#"{"region": null}"#).unwrap();

    let source = TemplatedGenerator::new(config).render_to_string(&context).unwrap();

    assert!(source.contains("public sealed class Closed : IAccountEvent\n{\n}\n"));
    assert!(source.contains("public interface IAccountAggregateState\n{\n    void When(Closed c);\n}\n"));
    assert!(!source.contains("#region"));
}

/// Naming style with prefixed fields and raw parameters
struct Verbatim;

impl NamingStyle for Verbatim {
    fn member_case(&self, identifier: &str) -> String {
        format!("m_{identifier}")
    }

    fn parameter_case(&self, identifier: &str) -> String {
        identifier.to_string()
    }
}

#[test]
fn generate___custom_naming_style___drives_member_and_parameter_names() {
    let context = Context::new()
        .with_contract(Message::new("Renamed").with_member(Member::new("int", "count")));
    let generator =
        TemplatedGenerator::with_naming(GeneratorConfig::default().without_region(), Verbatim);

    let source = generator.render_to_string(&context).unwrap();

    assert!(source.contains("[ProtoMember(1)] public readonly int m_count;"));
    assert!(source.contains("public Renamed (int count)"));
    assert!(source.contains("m_count = count;"));
}
