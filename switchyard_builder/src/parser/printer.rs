use crate::api::ArgumentOption;
use crate::model::ValidationResult;
use crate::parser::interface::UserInterface;

const HEADER_RULE: &str = "---------";

pub(crate) struct Printer<'a> {
    program: &'a str,
    version: &'a str,
}

impl<'a> Printer<'a> {
    pub(crate) fn new(program: &'a str, version: &'a str) -> Self {
        Self { program, version }
    }

    pub(crate) fn print_usage(
        &self,
        options: &[ArgumentOption],
        errors: Option<&ValidationResult>,
        user_interface: &mut dyn UserInterface,
    ) {
        user_interface.write(&format!("{}\n", self.program));
        user_interface.write(&format!("{}\n", self.version));
        user_interface.write(&format!("{HEADER_RULE}\n"));

        for option in options {
            print_option(option, user_interface);
        }

        user_interface.write("\n");

        if let Some(validation) = errors.filter(|v| !v.is_valid()) {
            user_interface.write("Errors:\n");
            for error in validation.errors() {
                user_interface.write(&format!(" * {error}\n"));
            }
        }
    }
}

fn print_option(option: &ArgumentOption, user_interface: &mut dyn UserInterface) {
    let flags = match option.short() {
        Some(short) => format!("--{}, -{short}", option.long()),
        None => format!("--{}", option.long()),
    };
    user_interface.write(&flags);
    user_interface.write("\t");

    if let Some(provider) = option.provider() {
        provider.usage(user_interface);
        if provider.requires_existence() {
            user_interface.write(" (required)");
        }
    }

    user_interface.write("\t");
    user_interface.write(option.description());
    user_interface.write("\n");
}
