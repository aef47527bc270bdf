//! Built-in Clyp code examples shown on the site.

use serde::Serialize;

/// One showcase program.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Example {
    pub key: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub code: &'static str,
}

/// An [`Example`] together with its rendered highlight.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct HighlightedExample {
    pub key: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub code: &'static str,
    pub highlighted_code: String,
}

impl Example {
    pub fn highlighted(&self) -> HighlightedExample {
        HighlightedExample {
            key: self.key,
            title: self.title,
            description: self.description,
            code: self.code,
            highlighted_code: clyp_highlight::highlight(self.code),
        }
    }
}

/// Display order is declaration order.
pub static EXAMPLES: [Example; 3] = [
    Example {
        key: "hello_world",
        title: "Hello World",
        description: "A simple greeting program showing variable declaration and function definition.",
        code: r#"# A simple "Hello, World!" program in Clyp
str name = "World";
print("Hello, " + name + "!");

# Define a function to greet someone
greet(str person) returns str {
    return "Greetings, " + person + "!";
};

# Call the function and print the result
print(greet("Clyp Developer"));"#,
    },
    Example {
        key: "data_structures",
        title: "Data Structures",
        description: "Working with lists, chunking, and flattening operations.",
        code: r#"# Working with data structures in Clyp
list[int] numbers = [1, 2, 3, 4, 5, 6];
print("Original list:");
print(numbers);

# Get chunks of the list
list[list[int]] chunks = chunk(numbers, 2);
print("List chunked into size 2:");
print(chunks);

# Flatten the list back
list[int] flattened = flatten(chunks);
print("Flattened list:");
print(flattened);

# Repeat loop for iteration
repeat 3 {
    print("Hello from a repeat loop!");
};"#,
    },
    Example {
        key: "advanced",
        title: "Advanced Features",
        description: "Classes, conditionals, and the powerful pipeline operator.",
        code: r#"# Advanced Clyp features
class Counter {
    int count = 0;
    
    increment(self) returns null {
        self.count = self.count + 1;
    };

    get_count(self) returns int {
        return self.count;
    };
};

let c = Counter();
c.increment();
c.increment();
print("Count is: " + toString(c.get_count()));"#,
    },
];

pub fn find(key: &str) -> Option<&'static Example> {
    EXAMPLES.iter().find(|example| example.key == key)
}
