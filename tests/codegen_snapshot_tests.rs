//! Golden snapshot tests for codegen
//!
//! These tests compile complete Skive programs and compare the generated C against inline snapshots, so
//! every layout change is reviewed and intentional.
//!
//! Run with: `cargo test --test codegen_snapshot_tests`
//! Review changes: `cargo insta review`

use skive::{EmitConfig, compile, compile_with_config};

/// Generate C code from Skive source
fn generate_c(source: &str) -> String {
    compile(source).expect("compilation failed")
}

#[test]
fn test_struct_function_and_global_codegen() {
    let source = r#"
struct Point x: int, y: int end

fn add(a: int, b: int) -> int
    return a + b
end

let total: int = add(1, 2)
"#;
    insta::assert_snapshot!(generate_c(source), @r#"
    #include "lib.h"

    // struct forward declarations
    typedef struct Point Point;

    // struct definitions
    typedef struct Point {
        int x;
        int y;
    } Point;

    // func forward declarations
    int add(int a, int b);

    // func definitions
    int add(int a, int b)
    {
        return (a + b);
    }

    // global declarations
    int total;

    int main(int argc, char** argv)
    {
        total = add(1, 2);
    }
    "#);
}

#[test]
fn test_control_flow_and_pointers_codegen() {
    let source = r#"
struct Node value: int, next: Node end

fn sum(list: Own<Node>) -> int
    let total: int = 0
    while list != 0 do
        total += list.value
        list = list.next
    end
    return total
end

let head: Node
if head == 0 then
    print_int(0)
else
    print_int(sum(head))
end
"#;
    insta::assert_snapshot!(generate_c(source), @r#"
    #include "lib.h"

    // struct forward declarations
    typedef struct Node Node;

    // struct definitions
    typedef struct Node {
        int value;
        Node* next;
    } Node;

    // func forward declarations
    int sum(Node* list);

    // func definitions
    int sum(Node* list)
    {
        int total = 0;
        while ((list != 0)) {
            (total += list->value);
            (list = list->next);
        }
        return total;
    }

    // global declarations
    Node* head;

    int main(int argc, char** argv)
    {
        if ((head == 0)) {
            print_int(0);
        } else {
            print_int(sum(head));
        }
    }
    "#);
}

#[test]
fn test_literals_and_operators_codegen() {
    let source = r#"
let s: String = "hi"
let c: char = 'a'
let n: int = 0x1F + -3 * 2
let f: float = 3. + 0.5
let first: int = v[0]
s.print()
print_int(if n > 0 then n else not n)
"#;
    insta::assert_snapshot!(generate_c(source), @r#"
    #include "lib.h"

    // global declarations
    String* s;
    char c;
    int n;
    float f;
    int first;

    int main(int argc, char** argv)
    {
        s = vec_from_string("hi");
        c = 'a';
        n = (31 + ((-3) * 2));
        f = (3 + 0.5);
        first = vec_get(v, 0);
        print(s);
        print_int(((n > 0) ? n : (!n)));
    }
    "#);
}

#[test]
fn test_multiple_functions_keep_registration_order() {
    let source = r#"
fn first() end
fn second(x: Vec<int>): Vec<int> return x end
fn third(p, q: Ref<String>) end
"#;
    insta::assert_snapshot!(generate_c(source), @r#"
    #include "lib.h"

    // func forward declarations
    void* first();
    Vec* second(Vec* x);
    void* third(void* p, String* q);

    // func definitions
    void* first()
    {
    }
    Vec* second(Vec* x)
    {
        return x;
    }
    void* third(void* p, String* q)
    {
    }

    int main(int argc, char** argv)
    {
    }
    "#);
}

#[test]
fn test_compact_layout_codegen() {
    let config = EmitConfig::new()
        .with_indent_width(2)
        .with_section_comments(false)
        .with_entry_point("int main(void)");
    let source = "fn twice(n: int) -> int return n * 2 end let x: int = twice(4)";
    insta::assert_snapshot!(compile_with_config(source, &config).unwrap(), @r#"
    #include "lib.h"

    int twice(int n);

    int twice(int n)
    {
      return (n * 2);
    }

    int x;

    int main(void)
    {
      x = twice(4);
    }
    "#);
}
