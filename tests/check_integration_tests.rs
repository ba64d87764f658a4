mod common;

use predicates::prelude::*;

use common::TestFixture;

#[test]
fn missing_return_is_reported_for_value_method() {
    let fixture = TestFixture::new();
    fixture.create_file(
        "Bar.cs",
        "/// <summary>\n\
         /// Computes a value.\n\
         /// </summary>\n\
         /// <param name=\"x\"> The input. </param>\n\
         public int Bar(int x)\n",
    );

    doc_guard!()
        .arg("check")
        .arg(fixture.path())
        .arg("--no-config")
        .assert()
        .code(1)
        .stdout(predicate::str::contains(
            "Method Bar has a return type, but no return comment",
        ));
}

#[test]
fn missing_and_redundant_params_are_both_reported() {
    let fixture = TestFixture::new();
    fixture.create_file(
        "Baz.cs",
        "/// <summary>\n\
         /// Combines two values.\n\
         /// </summary>\n\
         /// <param name=\"x\"> The first value. </param>\n\
         /// <param name=\"z\"> Not a real argument. </param>\n\
         public void Baz(int x, int y)\n",
    );

    doc_guard!()
        .arg("check")
        .arg(fixture.path())
        .arg("--no-config")
        .assert()
        .code(1)
        .stdout(predicate::str::contains(
            "does not have a parameter comment for parameter y",
        ))
        .stdout(predicate::str::contains(
            "has a redundant comment for parameter z",
        ));
}

#[test]
fn record_declarations_are_not_checked() {
    let fixture = TestFixture::new();
    fixture.create_file("Person.cs", "public record Person(string Name)\n");

    doc_guard!()
        .arg("check")
        .arg(fixture.path())
        .arg("--no-config")
        .assert()
        .success();
}

#[test]
fn exempt_marker_suppresses_doc_checks() {
    let fixture = TestFixture::new();
    fixture.create_file("Exempt.cs", "// <exempt>\npublic int Bar(int x)\n");

    doc_guard!()
        .arg("check")
        .arg(fixture.path())
        .arg("--no-config")
        .assert()
        .success();
}

#[test]
fn exempt_marker_suppresses_inline_issue() {
    let fixture = TestFixture::new();
    fixture.create_file(
        "Inline.cs",
        "    // <exempt>\n    int a = 1; // lowercase no period\n",
    );

    doc_guard!()
        .arg("check")
        .arg(fixture.path())
        .arg("--no-config")
        .assert()
        .success();
}

#[test]
fn malformed_inline_comment_names_file_and_line() {
    let fixture = TestFixture::new();
    fixture.create_file("Inline.cs", "int a = 1; // lowercase no period\n");

    doc_guard!()
        .arg("check")
        .arg(fixture.path())
        .arg("--no-config")
        .assert()
        .code(1)
        .stdout(predicate::str::contains(
            "File Inline.cs does not have a proper comment at line 1",
        ))
        .stdout(predicate::str::contains("Inline.cs:1"));
}

#[test]
fn signature_on_first_line_is_handled() {
    let fixture = TestFixture::new();
    fixture.create_file("First.cs", "public void Foo()\n");

    doc_guard!()
        .arg("check")
        .arg(fixture.path())
        .arg("--no-config")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("does not have a summary"));
}

#[test]
fn issues_from_multiple_files_accumulate() {
    let fixture = TestFixture::new();
    fixture.create_undocumented_cs_file("a/One.cs");
    fixture.create_undocumented_cs_file("b/Two.cs");

    doc_guard!()
        .arg("check")
        .arg(fixture.path())
        .arg("--no-config")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("2 file(s) checked"))
        .stdout(predicate::str::contains("2 issue(s) found"));
}

#[test]
fn repeated_runs_produce_identical_output() {
    let fixture = TestFixture::new();
    fixture.create_undocumented_cs_file("a/One.cs");
    fixture.create_file("b/Two.cs", "int a = 1; // lowercase no period\n");

    let run = || {
        doc_guard!()
            .arg("check")
            .arg(fixture.path())
            .arg("--no-config")
            .assert()
            .code(1)
            .get_output()
            .stdout
            .clone()
    };

    assert_eq!(run(), run());
}

#[test]
fn no_doc_flag_disables_signature_checks() {
    let fixture = TestFixture::new();
    fixture.create_undocumented_cs_file("Foo.cs");

    doc_guard!()
        .arg("check")
        .arg(fixture.path())
        .arg("--no-config")
        .arg("--no-doc")
        .assert()
        .success();
}

#[test]
fn no_inline_flag_disables_comment_checks() {
    let fixture = TestFixture::new();
    fixture.create_file("Inline.cs", "int a = 1; // lowercase no period\n");

    doc_guard!()
        .arg("check")
        .arg(fixture.path())
        .arg("--no-config")
        .arg("--no-inline")
        .assert()
        .success();
}
