//! Short or noisy forms that carry their own anchoring.
//!
//! No boundary is added around this bucket, so every entry either anchors
//! itself (`(?:^| )...(?: |$)`) or is distinctive enough to match anywhere.

use super::Rule;

/// Self-anchored rules in evaluation order.
pub const UNBOUNDED: &[Rule] = &[
    Rule::Template(r"👉👌"),
    Rule::Template(r"sexoanal"),
    Rule::Template(r"masturbar"),
    Rule::Template(r"cykably[ae]t"),
    Rule::Template(r"autists?{wb}"),
    Rule::Template(r"bitch"),
    Rule::Template(r"pussy(?!cat|foot(?:ing)?)"),
    Rule::Template(r"nastyhoe"),
    Rule::Template(r"(?:^| )irape"),
    Rule::Template(r"rapechild"),
    Rule::Template(r"ifinger"),
    Rule::Template(r"^negros[.!?]*$"),
    Rule::Template(r"f[a@]+[g3]+[eou0i]ts?{wb}"),
    Rule::Template(r"fags?{wb}"),
    Rule::Template(r"{wb}fag(?:g|o)ot"),
    Rule::Template(r"{letters:fuck}(?:{letters:ing}|{letters:er}s?)?"),
    Rule::Template(r"{wb}fuk(?:you|ass|of+)"),
    Rule::Template(r"f[au]ck(?:er[sz]?|ing)"),
    Rule::Template(r"fuking"),
    Rule::Template(r"fvkin"),
    Rule::Template(r"fvck"),
    Rule::Template(r"fu(?:ck|kc)"),
    Rule::Template(r"f +u +c *k"),
    Rule::Template(r"^a s s$"),
    Rule::Template(r"fukin"),
    Rule::Template(r"[*]+exual"),
    Rule::Template(r"(?:^| )ʞɔnɟ(?: |$)"),
    Rule::Template(r"(?:^| )[aα]ss(?: |$)"),
    Rule::Template(r"(?:^| )[a4]n[a4]l(?: |$)"),
    Rule::Template(r"^beaches$"),
    Rule::Template(r"(?:^| )b *[i!] *t *c *{anyH}(?: |$)"),
    Rule::Template(r"(?:^| )f *{anyU} *{c} *{anyK}(?: |$)"),
    Rule::Template(r"(?:^| )fv\|<(?: |$)"),
    Rule::Template(r"(?:^| )fu[#&%_]{2,}(?: |$)"),
    Rule::Template(r"(?:^| )fu\[\|<(?:ing|er)?(?: |$)"),
    Rule::Template(r"{spaced:fuck:s}"),
    Rule::Template(r"(?:^| )cum~+(?: |$)"),
    Rule::Template(r"(?:^| )[*]+cum[*]+(?: |$)"),
    Rule::Template(r"(?:^| )dild0[0-9]*(?: |$)"),
    Rule::Template(r"(?:^| ){letters:cunt}(?: |$)"),
    Rule::Template(r"(?:^| ){letters:tits}(?: |$)"),
    Rule::Template(r"(?:^| ){letters:bitch}(?: |$)"),
    Rule::Template(r"(?:^| ){letters:penis}(?: |$)"),
    Rule::Template(r"(?:^| ){letters:nigga}(?: |$)"),
    Rule::Template(r"(?:^| ){letters:nigger}(?: |$)"),
    Rule::Template(r"(?:^| )n[i1][g69]{2,}[a4][s5]?(?: |$)"),
    Rule::Template(r"(?:^| )\|\\\|az[i|]s?(?: |$)"),
    Rule::Template(r"(?:^| )\|-\|e{anyN}ta[i|](?: |$)"),
    Rule::Template(r"(?:^| )\${anyH}it(?: |$)"),
    Rule::Template(r"(?:^| )sh[i1!][+](?: |$)"),
    Rule::Template(r"(?:^| )👃unts?(?: |$)"),
    Rule::Template(r"(?:^| )d{i}{c}{k}(?: |$)"),
    Rule::Template(r"(?:^| ){anyD}[i1][c(]k[s$]?(?: |$)"),
    Rule::Template(r"(?:^| )stf{anyU}(?: |$)"),
    Rule::Template(r"(?:^| )s +t +f +{anyU}(?: |$)"),
    Rule::Template(r"(?:^| )\$hithead(?: |$)"),
    Rule::Template(r"(?:^| ){s}{e}{x}(?: |$)"),
    Rule::Template(r"(?:^| ){p}{o}r{n}(?: |$)"),
    Rule::Template(r"(?:^| )p{o}rn{o}+h*(?: |$)"),
    Rule::Template(r"(?:^| )p[*]rn{o}+(?: |$)"),
    Rule::Template(r"(?:^| )l[o0]l[i1](s|x|cons?)?(?: |$)"),
    Rule::Template(r"(?:^| )[*]humps[*](?: |$)"),
    Rule::Template(r"(?:^| ){o}+r+g+(?:y+|ies|{i}[a4])(?: |$)"),
    Rule::Template(r"(?:^| ){o}rg{a}sm(?: |$)"),
    Rule::Template(r"(?:^| ){o}v[e3]r?s[e3]x[e3]d(?: |$)"),
    Rule::Template(r"(?:^| ){o}r4l(?: |$)"),
    Rule::Template(r"(?:^| )h[e*]nt[a*][i1](?: |$)"),
    Rule::Template(r"suckmydick"),
    Rule::Template(r"^(?:(?:sup|hi|hey|you) )?botch[!.]*$"),
    Rule::Template(r"(?:^| )an[0○](?: |$)"),
    Rule::Template(r"(?:^| )(?:ort0|0r[t7][o0])(?: |$)"),
    Rule::Template(r"(?:^| )m[i1][e3]rd4(?: |$)"),
    Rule::Template(r"(?:^| )mi?er[d#][#]+(?: |$)"),
    Rule::Template(r"(?:^| )maric[a4](?: |$)"),
    Rule::Template(r"(?:^| )c[a*4]+r[a4]j[o0](?: |$)"),
    Rule::Template(r"(?:^| )caralh[0#](?: |$)"),
    Rule::Template(r"(?:^| )put[04#]+[sh]*(?: |$)"),
    Rule::Template(r"(?:^| )p{u}t{a}(?: |$)"),
    Rule::Template(r"(?:^| )pu[*]{2}(?: |$)"),
    Rule::Template(r"(?:^| )p[vw]t{o}(?: |$)"),
    Rule::Template(r"(?:^| )pvt{a}[s!]?(?: |$)"),
    Rule::Template(r"(?:^| )pvt{a}s[o0]s(?: |$)"),
    Rule::Template(r"(?:^| )-*pv?t{a}z[o0]h?-*(?: |$)"),
    Rule::Template(r"(?:^| )p[t7][@0](?: |$)"),
    Rule::Template(r"(?:^| )(?:chupa(?:r|me) la )?p[i1]j4h?(?: |$)"),
    Rule::Template(r"(?:^| )p[e3]?nd[e3]j0[sz]?(?: |$)"),
    Rule::Template(r"(?:^| )(p4j[a4]|paj4)(?: |$)"),
    Rule::Template(r"(?:^| )p[e3€]n[3€]h*(?: |$)"),
    Rule::Template(r"(?:^| )p[3€]n[e3€]h*(?: |$)"),
    Rule::Template(r"(?:^| )porr[@#](?: |$)"),
    Rule::Template(r"(?:^| )su<<(?: |$)"),
    Rule::Template(r"(?:^| )fod[4@#](?: |$)"),
    Rule::Template(r"(?:^| )c[o0]ñ[o0](?: |$)"),
    Rule::Template(r"(?:^| )cul[o0](?: |$)"),
    Rule::Template(r"(?:^| )n[e3]p3(?: |$)"),
    Rule::Template(r"(?:^| )a[_]?[s$5]{2}(?: |$)"),
    Rule::Template(r"(?:^| )/\\[s$]{2}(?: |$)"),
    Rule::Template(r"(?:^| )\+turbar(?: |$)"),
    Rule::Template(r"(?:^| )kg4rl4(?: |$)"),
    Rule::Template(r"(?:^| )[*]viola[*]?(?: |$)"),
    Rule::Template(r"(?:^| )v[e3]?rg[a4](?: |$)"),
    Rule::Template(r"(?:^| )b[e3]?rg4(?: |$)"),
    Rule::Template(r"(?:^| )[vb][i1]{o}l[03](?: |$)"),
    Rule::Template(r"(?:^| )s{e}x{o}(?: |$)"),
    Rule::Template(r"(?:^| )p[e3]l[o0][t7]ud0(?: |$)"),
    Rule::Template(r"(?:^| )j[o0]d[e3]t[e3](?: |$)"),
    Rule::Template(r"suicidate"),
    Rule::Template(r"^[* ]*chupando[* ]*$"),
    Rule::RichOnly(r"(?:^| )6+ля(?: |$)"),
    Rule::RichOnly(r"(?:^| )6лять(?: |$)"),
    Rule::RichOnly(r"(?<!бар)с+[у*]+ч*к+а+"),
    Rule::Template(r"(?:^| )fu[(|]<(?:ing)?(?: |$)"),
    Rule::Template(r"(?:^| ){letters:nigger}(?: |$)"),
    Rule::Template(r"(?:^|^{sep4} ?|\S\S | U )f+ +(?:her|him|you|of+|out|me|urself|yourself|everyone|admins|mods|moderators|my life|harder){wb}"),
    Rule::Template(r#"(?:^|[ \(\)\{\}\]\[:;!|`"@#$%^&*,._=+~\-])(?!(?:s+hh+|ss+h)[ .,!-]+it){spaced:shit:s}{wb}"#),
    Rule::Template(r"(?:^| )[a][*#]{2}( |$)"),
    Rule::Template(r"{wb}bi.ch{wb}(?! tree)"),
    Rule::Template(r"{wb}c+[y*]+u*k+a+{wb}"),
    Rule::Template(r"^cum$"),
    Rule::Template(r"^fu?[*]+(?: |$)"),
    Rule::Template(r" fu?[*]+ "),
    Rule::Template(r"[a-z]{2,} f+[*]* +u+$"),
    Rule::Template(r"{wb}f{2,}[*]* +u+$"),
    Rule::Template(r"^f+[*]* +u+(?= +[^a-z ])"),
    Rule::Template(r"^f+[*]* +u+(?! *s *i *o *n)(?= +[a-z][a-z]+)"),
    Rule::Template(r"^f+[*]* +u+$"),
    Rule::Template(r"^f u c$"),
    Rule::Template(r"^fak$"),
    Rule::Template(r"(?:^| ){sep3}{2,} *(?:uck+(?:ing)?|itch)(?: |$)"),
    Rule::Template(r"(?:^| ){sep4} *(?:uck+(?:ing)?|itch)(?: |$)"),
    Rule::Template(r"{wb}f[@#$%^&*]{2,}(?: |$)"),
    Rule::Template(r"(?:^| )[*]{3,} (?:her+|him+|you+r?|of+|out|me+){wb}"),
    Rule::Template(r"(?:^ *|[^s ] +)h +[o0] *e *s?{wb}"),
    Rule::Template(r"(?:^|{sep})di{sep}[ck](?:$|{sep})"),
    Rule::Template(r"8[:=-]{3,}[|]?[oD3>][-~]*"),
    Rule::Template(r"8==[|]?[oD]"),
    Rule::Template(r"8[ =]{2,}D"),
    Rule::Template(r"(?:^| )[.][i|][.](?: |$)"),
    Rule::Template(r"c[=-]{3,}3"),
    Rule::Template(r"(?:^| )n [i!] g g [e3] s [t^](?: |$)"),
    Rule::Template(r"(?<![^A-Za-z0-9_]i)(?<!^i){ws}{letters:tho}[{onlyT}]+{we}"),
    Rule::Template(r"child *porn"),
    Rule::Template(r"\Sporn{wb}"),
    Rule::Template(r"nigger"),
    Rule::Template(r"childrapist"),
    Rule::Template(r"rapeyou"),
    Rule::Template(r"{wb}rapist"),
    Rule::Template(r"(?:{wb}g|being)rape?(?:ing|d){wb}"),
    Rule::Template(r"rule *34"),
    Rule::Template(r"[48]chan\."),
    Rule::Template(r"^aids$"),
    Rule::Template(r"(?:p[o0]rno?hub|redtube|lemonparty|brazzers|youporn|xvidios)"),
    Rule::Template(r"yiffyiff"),
    Rule::Template(r"[(]+[yу][kк][aа]"),
    Rule::Template(r"jeba(?:n[aey]{rich:|ć|ł[ay]?})"),
    Rule::Template(r"rozjebie"),
    Rule::Template(r"spieprzaj"),
    Rule::Template(r"odpierdol ?sie"),
    Rule::Template(r"(?:^| )くそ(?: |$)"),
];
