use nmeaprims_frame::{decode_frame, encode_frame, Frame, FrameConfig};
use nmeaprims_registry::CodecRegistry;
use nmeaprims_sentences::{
    builtin_registry, HdtPacket, NixReceivedPacket, NixReplyPacket, Packet, VtgPacket, XdrPacket,
};
use proptest::prelude::*;

fn measurement() -> impl Strategy<Value = f64> {
    -1.0e6..1.0e6f64
}

fn talker() -> impl Strategy<Value = Option<String>> {
    "[A-OQ-Z][A-Z]".prop_map(Some)
}

/// Trailing XDR groups such as `G,002`.
fn extra_groups() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[A-Z0-9]{0,4}", 0..4)
}

fn chain() -> impl Strategy<Value = (u32, Vec<u32>)> {
    (any::<u32>(), prop::collection::vec(any::<u32>(), 0..6))
}

fn packet_strategy() -> impl Strategy<Value = Packet> {
    prop_oneof![
        (
            talker(),
            measurement(),
            measurement(),
            measurement(),
            measurement(),
            extra_groups(),
        )
            .prop_map(
                |(talker_id, heading, pitch, roll, altimeter_temp, extra_groups)| {
                    Packet::Xdr(XdrPacket {
                        talker_id,
                        heading,
                        pitch,
                        roll,
                        altimeter_temp,
                        extra_groups,
                    })
                }
            ),
        (
            any::<u32>(),
            chain(),
            prop::option::of(measurement()),
            prop::option::of(measurement()),
        )
            .prop_map(|(sequence, (src, destinations), slant, range)| {
                Packet::NixReply(NixReplyPacket {
                    sequence,
                    src,
                    destinations,
                    slant,
                    range,
                })
            }),
        (
            (any::<u32>(), measurement(), measurement(), measurement(), any::<i32>()),
            (measurement(), measurement(), measurement()),
            ("[A-Za-z0-9+/=]{0,32}", any::<u32>(), "(MASQ[0-9]{2,4})?"),
            (chain(), prop::option::of(measurement()), prop::option::of(measurement())),
        )
            .prop_map(
                |(
                    (selrx, receive_time, dop, snr, err),
                    (transpond_delay, rx_power, rw_margin),
                    (data, protocol, acoustic_baud_rate),
                    ((src, destinations), slant, range),
                )| {
                    Packet::NixReceived(NixReceivedPacket {
                        selrx,
                        receive_time,
                        dop,
                        snr,
                        err,
                        transpond_delay,
                        rx_power,
                        rw_margin,
                        data,
                        protocol,
                        acoustic_baud_rate,
                        src,
                        destinations,
                        slant,
                        range,
                    })
                }
            ),
        (
            talker(),
            measurement(),
            measurement(),
            measurement(),
            prop::option::of(measurement()),
            prop::option::of(prop::char::range('A', 'Z')),
        )
            .prop_map(
                |(talker_id, track_true, track_magnetic, speed_knots, speed_kmph, mode)| {
                    Packet::Vtg(VtgPacket {
                        talker_id,
                        track_true,
                        track_magnetic,
                        speed_knots,
                        speed_kmph,
                        mode,
                    })
                }
            ),
        (talker(), measurement())
            .prop_map(|(talker_id, heading)| Packet::Hdt(HdtPacket { talker_id, heading })),
    ]
}

fn to_wire(registry: &CodecRegistry<Packet>, packet: &Packet) -> String {
    let entry = registry.lookup_packet(packet).unwrap();
    let fields = entry.encode(packet).unwrap();
    let frame = Frame::new(packet.talker_id(), entry.sentence_id, fields).unwrap();
    encode_frame(&frame, &FrameConfig::default()).unwrap()
}

fn from_wire(registry: &CodecRegistry<Packet>, line: &str) -> Packet {
    let frame = decode_frame(line, &FrameConfig::default()).unwrap();
    registry.lookup(&frame).unwrap().decode(&frame).unwrap()
}

proptest! {
    #[test]
    fn prop_packet_roundtrip(packet in packet_strategy()) {
        let registry = builtin_registry().unwrap();
        let line = to_wire(&registry, &packet);
        prop_assert!(line.ends_with("\r\n"));
        prop_assert_eq!(from_wire(&registry, &line), packet);
    }

    #[test]
    fn prop_wire_is_stable(packet in packet_strategy()) {
        let registry = builtin_registry().unwrap();
        let line = to_wire(&registry, &packet);
        let again = to_wire(&registry, &from_wire(&registry, &line));
        prop_assert_eq!(again, line);
    }
}
