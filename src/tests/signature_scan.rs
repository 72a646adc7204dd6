use crate::core::clc::{scan_kernels, ClcError};
use crate::tests::CL_PROGRAM_SRC;

#[test]
fn tabulates_kernels_in_declaration_order() {
    let sigs = scan_kernels(CL_PROGRAM_SRC).unwrap();
    assert_eq!(sigs.len(), 2);
    assert_eq!(sigs[0].name(), "add");
    assert_eq!(sigs[0].num_args(), 3);
    assert_eq!(sigs[1].name(), "axpy");
    assert_eq!(sigs[1].num_args(), 4);
}

#[test]
fn captures_raw_parameter_text() {
    let sigs = scan_kernels("kernel void f(global int* a, int b) {}").unwrap();
    assert_eq!(sigs[0].params(), &["global int* a".to_string(), "int b".to_string()]);
}

#[test]
fn accepts_double_underscore_qualifiers() {
    let src = r#"
        __kernel void multiply_by_scalar(
                    __global float const* const src,
                    __private float const coeff,
                    __global float* const res)
        {
            uint const idx = get_global_id(0);
            res[idx] = src[idx] * coeff;
        }
    "#;
    let sigs = scan_kernels(src).unwrap();
    assert_eq!(sigs.len(), 1);
    assert_eq!(sigs[0].name(), "multiply_by_scalar");
    assert_eq!(sigs[0].num_args(), 3);
}

#[test]
fn zero_arg_kernels() {
    let sigs = scan_kernels("kernel void noop() {}").unwrap();
    assert_eq!(sigs[0].num_args(), 0);

    let sigs = scan_kernels("kernel void noop(void) {}").unwrap();
    assert_eq!(sigs[0].num_args(), 0);

    let sigs = scan_kernels("kernel void noop( void ) {}").unwrap();
    assert_eq!(sigs[0].num_args(), 0);
}

#[test]
fn ignores_comments_and_preprocessor_lines() {
    let src = r#"
        // kernel void not_a_kernel(int a) {}
        /* kernel void also_not_a_kernel(int a, int b) {} */
        #define kernel_count 2
        kernel void real(global int* a) { a[0] = 0; /* , */ }
    "#;
    let sigs = scan_kernels(src).unwrap();
    assert_eq!(sigs.len(), 1);
    assert_eq!(sigs[0].name(), "real");
    assert_eq!(sigs[0].num_args(), 1);
}

#[test]
fn comment_markers_inside_string_literals_are_literal_text() {
    let src = r#"
        kernel void first(global char* out) {
            constant char* s = "a/*b";
            constant char* u = "http://x";
            char c = '/';
        }

        kernel void second(global int* a, global int* b) {}
    "#;
    let sigs = scan_kernels(src).unwrap();
    assert_eq!(sigs.len(), 2);
    assert_eq!(sigs[0].name(), "first");
    assert_eq!(sigs[0].num_args(), 1);
    assert_eq!(sigs[1].name(), "second");
    assert_eq!(sigs[1].num_args(), 2);
}

#[test]
fn continued_preprocessor_directives_are_fully_blanked() {
    let src = r#"
        #define DECLARE_FAKE \
            kernel void fake(int x); \
            kernel void faker(int x, int y);
        kernel void real(global int* a) {}
    "#;
    let sigs = scan_kernels(src).unwrap();
    assert_eq!(sigs.len(), 1);
    assert_eq!(sigs[0].name(), "real");
    assert_eq!(sigs[0].num_args(), 1);
}

#[test]
fn ignores_non_kernel_functions_and_nested_mentions() {
    let src = r#"
        static void helper(int a, int b) {}
        kernel void outer(global int* a) {
            const char* s = "kernel void fake(int x)";
        }
    "#;
    let sigs = scan_kernels(src).unwrap();
    assert_eq!(sigs.len(), 1);
    assert_eq!(sigs[0].name(), "outer");
}

#[test]
fn accepts_attribute_clauses() {
    let src = r#"
        kernel __attribute__((reqd_work_group_size(64, 1, 1)))
        void tiled(global float* data, local float* scratch) {}
    "#;
    let sigs = scan_kernels(src).unwrap();
    assert_eq!(sigs.len(), 1);
    assert_eq!(sigs[0].name(), "tiled");
    assert_eq!(sigs[0].num_args(), 2);
}

#[test]
fn multiline_declarations() {
    let src = "kernel\nvoid\nspread\n(\nint a,\nint b\n)\n{}";
    let sigs = scan_kernels(src).unwrap();
    assert_eq!(sigs[0].name(), "spread");
    assert_eq!(sigs[0].num_args(), 2);
}

#[test]
fn empty_source_declares_nothing() {
    assert!(scan_kernels("").unwrap().is_empty());
    assert!(scan_kernels("static int x = 0;").unwrap().is_empty());
}

#[test]
fn unterminated_block_comment_is_an_error() {
    match scan_kernels("kernel void f(int a) {} /* trailing") {
        Err(ClcError::UnterminatedComment(_)) => {}
        other => panic!("expected unterminated comment error, got: {:?}", other),
    }
}

#[test]
fn unterminated_parameter_list_is_an_error() {
    match scan_kernels("kernel void f(int a, int b") {
        Err(ClcError::UnterminatedParams(name)) => assert_eq!(name, "f"),
        other => panic!("expected unterminated params error, got: {:?}", other),
    }
}

#[test]
fn kernel_qualifier_without_definition_is_an_error() {
    match scan_kernels("kernel ;") {
        Err(ClcError::MalformedKernel(_)) => {}
        other => panic!("expected malformed kernel error, got: {:?}", other),
    }
}
