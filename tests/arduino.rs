#[cfg(test)]
mod tests {
    use std::io::Write;

    use linesend::{
        Transmitter,
        interface::{DeviceInterfaceType, SerialportParams},
    };

    #[test]
    #[ignore = "needs a board running the interpreter sketch"]
    fn test_arduino_transfer() {
        let mut program = tempfile::NamedTempFile::new().unwrap();
        program.write_all(b"PUSH 1\nPUSH 2\nADD\nPRINT\n").unwrap();

        // Platform defaults
        {
            let mut transmitter =
                Transmitter::from_platform(std::env::consts::OS, None, None).unwrap();
            transmitter.progress_bar(true);
            let summary = transmitter.send_file(program.path()).unwrap();
            assert_eq!(summary.lines_sent, 4);
        }

        // Explicit port and baud rate
        {
            let transmitter = Transmitter::from_platform(
                std::env::consts::OS,
                Some(DeviceInterfaceType::Serial(SerialportParams {
                    port: Some("/dev/ttyACM0".to_string()),
                    baud: Some(9600),
                })),
                Some(150),
            )
            .unwrap();
            transmitter.send_file(program.path()).unwrap();
        }
    }
}
