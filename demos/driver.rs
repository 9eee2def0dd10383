use cargparse::ArgumentList;

fn main() {
    let parser = ArgumentList::new()
        .declare('a', "apply", "Optional argument without value", false, true)
        .declare('c', "check", "Optional argument with value", true, true)
        .declare('t', "test", "Mandatory argument without value", false, false)
        .declare('b', "bad", "Mandatory argument with value", true, false)
        .declare_positional('p', "positional1", "Optional positional argument", true)
        .declare_positional('q', "positional2", "Mandatory positional argument", false)
        .build();

    let arguments = parser.parse();

    if arguments.help_requested() {
        return;
    }

    for id in ['a', 'c', 't', 'b', 'p', 'q'] {
        if arguments.is_present(id) {
            println!("-{id} : {}", arguments.value(id).unwrap_or_default());
        }
    }

    if arguments.missing_mandatory() {
        std::process::exit(1);
    }
}
